// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content.\n\n- Bullet point\n- Another item\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_video_document(videos: usize) -> String {
    let mut content = String::new();
    for i in 0..videos {
        content.push_str(&format!("## Clip {i}\n\n"));
        content.push_str(&format!("[Video: Clip {i}]\n"));
        content.push_str(&format!("![poster](http://p/{i}.png)\n"));
        content.push_str(&format!("[download.mp4](http://v/{i}.mp4)\n"));
        content.push_str(&format!("[download.webm][webm{i}]\n"));
        content.push_str(&format!(
            "[subtitle.en-US.vtt](http://s/{i}/en.vtt \"English\")\n\n"
        ));
        content.push_str(&format!("[webm{i}]: http://v/{i}.webm\n\n"));
    }
    content
}
