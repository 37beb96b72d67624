#![no_main]

use libfuzzer_sys::fuzz_target;
use pdftool::config::{CompressionQuality, CompressorCommand};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");

    let Ok(template) = CompressorCommand::parse(s) else {
        return;
    };

    // Paths that themselves look like placeholders must come through verbatim
    let input = Path::new("{output} in.pdf");
    let output = Path::new("{input}/out.pdf");
    let command = template.build(input, output, CompressionQuality::Screen);

    assert_eq!(command.program(), template.program());
    assert_eq!(command.args().len(), s.split_whitespace().count() - 1);
    assert!(command.args().iter().any(|arg| {
        arg.to_string_lossy().contains("{output} in.pdf")
    }));
});
