pub mod color;
pub mod constants;
pub mod editor;
pub mod export;
pub mod fill;
pub mod grid;
pub mod palette;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::color::Color;
pub use crate::editor::{Editor, Tool};
pub use crate::fill::flood_fill;
pub use crate::grid::Grid;
pub use crate::palette::Palette;

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_pxa"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
