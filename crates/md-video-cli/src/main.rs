use anyhow::{Context, Result};
use md_video_config::Config;
use md_video_engine::{Renderer, VideoOptions};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

/// Sample block rendered by `--demo`.
const DEMO_DOCUMENT: &str = r#"[Video: Title of the Video]
![poster](http://link.to.poster/link.png)
[download.mp4](http://link.to.video/fil e.mp4)
[download.ogg](http://link.to.video/fil e.ogv)
[download.webm](http://link.to.video/fil e.webm)
[subtitle.en-US.vtt](http://link.to.sub title/en_us.vtt "English")
[subtitle.zh.vtt](http://link.to.subtit le/zh.vtt "Chinese")
"#;

const USAGE: &str = "[--demo] [--crossorigin VALUE] [--config PATH] [FILE]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    demo: bool,
    crossorigin: Option<String>,
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--demo" => parsed.demo = true,
            "--crossorigin" => {
                let value = iter.next().ok_or("--crossorigin needs a value")?;
                parsed.crossorigin = Some(value.clone());
            }
            "--config" => {
                let value = iter.next().ok_or("--config needs a path")?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            file => {
                if parsed.file.is_some() {
                    return Err("only one input file is supported".to_string());
                }
                parsed.file = Some(PathBuf::from(file));
            }
        }
    }

    if parsed.demo && parsed.file.is_some() {
        return Err("--demo does not take an input file".to_string());
    }
    Ok(parsed)
}

fn load_config(args: &CliArgs) -> Result<Config> {
    let config = match &args.config_path {
        Some(config_path) => {
            log::debug!("Config path: {}", config_path.display());
            Config::load_from_path(config_path)?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    }
    .unwrap_or_default();
    Ok(config.with_crossorigin(args.crossorigin.clone()))
}

fn read_input(args: &CliArgs) -> Result<String> {
    if args.demo {
        return Ok(DEMO_DOCUMENT.to_string());
    }
    match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("md-video");

    let cli = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let config = load_config(&cli)?;
    let markdown = read_input(&cli)?;

    let mut renderer = Renderer::new(VideoOptions {
        crossorigin: config.crossorigin,
    });
    print!("{}", renderer.render(&markdown));
    Ok(())
}
