/*!
Search and browse travel destinations in the terminal.
*/
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

#[macro_use]
extern crate lazy_static;

mod app;
mod args;
mod catalog;
mod color;
mod component;
mod components;
mod config;
mod debounce;
mod event;
mod handoff;
#[cfg(feature = "logging")]
mod logging;
mod notifier;
mod paths;
mod rendering;
mod stateful;
mod storage;
mod system_effect;

use std::process::exit;

use clap::Parser;
use crossterm::terminal;
#[cfg(feature = "logging")]
use flexi_logger::LoggerHandle;

use crate::app::App;
use crate::args::Args;
use crate::component::Component;
use crate::components::{Wanderlust, WanderlustProps};
use crate::config::{Config, StorageKind};
use crate::handoff::Handoff;
#[cfg(feature = "logging")]
use crate::logging::{configure_logging, ConfigureLoggingResult, LogOptions};
use crate::paths::WANDERLUST_DIR;
use crate::rendering::Size;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::system_effect::SystemEffect;

/// Return the storage the handoff should use, falling back to memory if the file store cannot be
/// opened.
fn open_storage(kind: StorageKind) -> Box<dyn Storage> {
    match kind {
        StorageKind::Memory => Box::new(MemoryStorage::new()),
        StorageKind::File => {
            let dir = match &*WANDERLUST_DIR {
                Some(dir) => dir,
                None => {
                    log::error!("Cannot determine the home directory, keeping the session in memory.");
                    return Box::new(MemoryStorage::new());
                }
            };
            match FileStorage::open(dir) {
                Ok(storage) => Box::new(storage),
                Err(error) => {
                    log::error!("{}", error);
                    Box::new(MemoryStorage::new())
                }
            }
        }
    }
}

fn main() {
    let args: Args = Args::parse();

    #[cfg(feature = "logging")]
    let _logger_handle: LoggerHandle = {
        let options = LogOptions::builder()
            .log_spec(args.log_specification())
            .log_file_path(args.log_file_path().clone())
            .build();
        let configure_logging_result: ConfigureLoggingResult = configure_logging(&options);
        match configure_logging_result {
            Ok(logger_handle) => logger_handle,
            Err(error) => {
                println!("Failed to configure logging: {}", error);
                exit(1);
            }
        }
    };

    let mut config: Config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            println!("{}", error);
            exit(1);
        }
    };
    if let Some(source) = args.source() {
        config.search_mut().set_source(source.clone());
    }
    if let Some(kind) = args.storage() {
        config.storage_mut().set_kind(kind);
    }

    let handoff = Handoff::new(open_storage(config.storage().kind()));
    let size: Size = match terminal::size() {
        Ok(size) => Size::from(size),
        Err(error) => {
            println!("Failed to determine the terminal size: {}", error);
            exit(1);
        }
    };

    let props: WanderlustProps = WanderlustProps::builder()
        .start(args.command().clone().into())
        .config(config)
        .handoff(handoff)
        .size(size)
        .build();
    let mut root = Wanderlust::new(props);
    let starting_effects = vec![SystemEffect::SetTitle {
        title: root.title(),
    }];

    let mut app = App::new();
    if let Err(error) = app.run(&mut root, starting_effects) {
        println!("{}", error);
        exit(1);
    }
}
