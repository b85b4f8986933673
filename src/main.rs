// ============================================================================
// File: src/main.rs
// ----------------------------------------------------------------------------
// Command-line surface for mysql-ramdisk.
// ============================================================================

use clap::{CommandFactory, Parser};
use log::debug;

use mysql_ramdisk::{Settings, mysql, ramdisk};

/// Manage the birth, life, and death of a MySQL ramdisk.
#[derive(Parser, Debug)]
#[command(name = "mysql-ramdisk", version, about)]
struct Cli {
    /// Create a ramdisk, format it, and mount it
    #[arg(short = 'c', long)]
    create_ramdisk: bool,

    /// Ramdisk size in MB (overrides the settings file)
    #[arg(short = 's', long, value_name = "MB")]
    ramdisk_size: Option<u64>,

    /// Also install and start a MySQL instance on the fresh ramdisk
    #[arg(short = 'm', long)]
    with_mysql: bool,

    /// Stop MySQL, unmount, and detach the ramdisk
    #[arg(short = 'k', long)]
    kill_ramdisk: bool,

    /// Device to detach, short for `hdiutil detach /dev/diskN`
    /// (overrides the settings file)
    #[arg(short = 'p', long, value_name = "DEVICE")]
    path_to_ramdisk: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(size) = cli.ramdisk_size {
        settings.ramdisk_size = size;
    }
    if let Some(device) = &cli.path_to_ramdisk {
        settings.ramdisk_device_path = device.clone();
    }
    debug!("Effective settings: {settings:?}");

    if cli.create_ramdisk {
        ramdisk::create(&mut settings);
        ramdisk::mount(&settings)?;
        if cli.with_mysql {
            mysql::install_db(&settings)?;
            mysql::start_db(&settings);
        }
    } else if cli.kill_ramdisk {
        mysql::stop_db(&settings);
        ramdisk::unmount(&settings);
        ramdisk::detach(&settings);
    } else {
        Cli::command().print_help()?;
        println!();
    }

    Ok(())
}
