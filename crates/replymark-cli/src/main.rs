use std::{
    env,
    io::{IsTerminal, Read},
    path::PathBuf,
    process,
};

use anyhow::{Context, Result, bail};
use replymark_config::{ColorMode, Config};
use replymark_engine::parse_blocks;

mod render;

use render::render_blocks;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [--json] [reply-file]");
    eprintln!("Reads stdin when no file is given (or when the file is '-').");
    process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("replymark", String::as_str);
    let mut json = false;
    let mut input: Option<PathBuf> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-" => {}
            _ if arg.starts_with('-') => usage(program),
            path => {
                if input.is_some() {
                    usage(program);
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            process::exit(1);
        }
    };

    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read reply from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read reply from stdin")?;
            buf
        }
    };

    if text.len() > config.max_reply_bytes {
        bail!(
            "reply is {} bytes, above the configured limit of {} bytes",
            text.len(),
            config.max_reply_bytes
        );
    }

    let blocks = parse_blocks(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    let color = match config.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };

    for line in render_blocks(&blocks, color) {
        println!("{line}");
    }

    Ok(())
}
