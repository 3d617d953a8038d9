//! Drives the interactive session with scripted stdin and captured stdout.

use icoforge::cli::{run_session, Prompter};
use icoforge::{Converter, ConverterSettings};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn write_png(path: &Path, side: u32) {
    RgbaImage::from_pixel(side, side, Rgba([10, 200, 10, 255]))
        .save_with_format(path, ImageFormat::Png)
        .expect("write png");
}

async fn run(input: &str, path: Option<String>, ext: Option<String>) -> (u8, String) {
    let converter = Converter::from_settings(&ConverterSettings::default()).expect("converter");
    let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
    let code = run_session(&converter, &mut prompter, path, ext)
        .await
        .expect("session");
    let output = String::from_utf8(prompter.into_output()).expect("utf8");
    (code, output)
}

#[tokio::test]
async fn interactive_folder_run_prints_report() {
    let temp = TempDir::new().expect("temp dir");
    write_png(&temp.path().join("a.png"), 48);
    std::fs::write(temp.path().join("b.png"), b"junk").unwrap();

    let input = format!("\"{}\"\npng\n", temp.path().display());
    let (code, output) = run(&input, None, None).await;

    assert_eq!(code, 1);
    assert!(output.starts_with("Input folder or file path: Input target extension: "));
    assert!(output.contains("a.png' ------ OK   [(32, 32), (16, 16)]"));
    assert!(output.contains("b.png' ------ ERROR:   "));
    assert!(output.contains(&format!(
        "Result folder: {}",
        temp.path().join("_ICO").display()
    )));
    assert!(output.contains("Success: 1\nErrors: 1"));
}

#[tokio::test]
async fn scripted_single_file_run() {
    let temp = TempDir::new().expect("temp dir");
    let source = temp.path().join("icon.png");
    write_png(&source, 300);

    let (code, output) = run("", Some(source.display().to_string()), None).await;

    assert_eq!(code, 0);
    assert_eq!(
        output,
        format!(
            "File converted successfully! (converted file: {}, ico sizes: [(256, 256), (128, 128), (64, 64), (32, 32), (16, 16)])\n",
            temp.path().join("icon.ico").display()
        )
    );
}

#[tokio::test]
async fn scripted_folder_uses_ext_flag_without_prompting() {
    let temp = TempDir::new().expect("temp dir");
    write_png(&temp.path().join("x.png"), 16);

    let (code, output) = run(
        "",
        Some(temp.path().display().to_string()),
        Some(".*".to_string()),
    )
    .await;

    assert_eq!(code, 0);
    assert!(!output.contains("Input target extension"));
    assert!(output.ends_with("Success: 1\nErrors: 0\n"));
}

#[tokio::test]
async fn empty_extension_reports_and_fails() {
    let temp = TempDir::new().expect("temp dir");
    write_png(&temp.path().join("x.png"), 16);

    let (code, output) = run("\n", Some(temp.path().display().to_string()), None).await;

    assert_eq!(code, 2);
    assert!(output.ends_with("Extension is incorrect!\n"));
    assert!(!temp.path().join("_ICO").exists());
}

#[tokio::test]
async fn unknown_path_reports_and_fails() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing");

    let (code, output) = run(&format!("{}\n", missing.display()), None, None).await;

    assert_eq!(code, 2);
    assert!(output.ends_with(&format!(
        "Path '{}' is incorrect or does not exist!\n",
        missing.display()
    )));
}
