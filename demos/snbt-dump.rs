use std::io::{self, Read};

use env_logger::Env;
use log::info;

//
// Dump a binary NBT file as SNBT. Reads the file named on the command line,
// or stdin if there is none. Gzipped input, as used by level.dat and player
// files, is detected and decompressed.
//
//   cargo run --example snbt-dump -- level.dat
//

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let mut buf = vec![];
    match std::env::args().nth(1) {
        Some(path) => {
            buf = std::fs::read(&path).unwrap();
            info!("read {} bytes from {}", buf.len(), path);
        }
        None => {
            io::stdin().read_to_end(&mut buf).unwrap();
        }
    }

    let root = if buf.starts_with(&[0x1f, 0x8b]) {
        info!("input is gzipped");
        dualnbt::transport::from_gzip(&buf)
    } else {
        dualnbt::from_bytes(&buf)
    };

    let root = match root {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!("root {:?} is a {:?}", root.name, root.tag.tag_type());

    match dualnbt::to_snbt(&root.tag) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
