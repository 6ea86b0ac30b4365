use clap::{Parser, Subcommand};

use amlich_canchi::tiet_khi_for_jdn;
use amlich_core::{decode_lunar_year, lunar_date_for};
use amlich_rs::day_info;
use amlich_time::{gregorian_from_jdn, jdn_from_gregorian};

#[derive(Parser)]
#[command(name = "amlich", about = "Vietnamese lunar calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gregorian date to its lunar date with all labels
    Lunar {
        /// Day of month (1-31)
        day: u32,
        /// Month (1-12)
        month: u32,
        /// Gregorian year (1900-2199)
        year: i32,
    },
    /// Can Chi name of a Gregorian year
    YearCanChi {
        /// Gregorian year
        year: i32,
    },
    /// Solar term (tiết khí) in effect on a Gregorian date
    TietKhi {
        /// Day of month (1-31)
        day: u32,
        /// Month (1-12)
        month: u32,
        /// Gregorian year
        year: i32,
    },
    /// Month boundaries of a lunar year
    Months {
        /// Gregorian year whose Tết starts the lunar year (1900-2199)
        year: i32,
    },
    /// Julian Day Number of a Gregorian date
    Jdn {
        /// Day of month (1-31)
        day: u32,
        /// Month (1-12)
        month: u32,
        /// Gregorian year
        year: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lunar { day, month, year } => {
            let info = day_info(day, month, year);
            if !info.lunar.is_valid() {
                eprintln!("Year {year} is outside the supported range 1900-2199 (JDN {})", info.lunar.jd);
                std::process::exit(1);
            }
            let leap_mark = if info.lunar.leap { " (leap)" } else { "" };
            println!(
                "{:02}/{:02}{}/{} - year {}, month {}, day {} (JDN {})",
                info.lunar.day,
                info.lunar.month,
                leap_mark,
                info.lunar.year,
                info.year_can_chi,
                info.month_can_chi,
                info.day_can_chi,
                info.lunar.jd
            );
            println!("Tiết khí: {}", info.tiet_khi.name());
        }

        Commands::YearCanChi { year } => {
            println!("{}", amlich_canchi::year_can_chi(year));
        }

        Commands::TietKhi { day, month, year } => {
            let jdn = jdn_from_gregorian(day, month, year);
            println!("{}", tiet_khi_for_jdn(jdn).name());
        }

        Commands::Months { year } => {
            let Some(boundaries) = decode_lunar_year(year) else {
                eprintln!("Year {year} is outside the supported range 1900-2199");
                std::process::exit(1);
            };
            for boundary in boundaries {
                let (gy, gm, gd) = gregorian_from_jdn(boundary.jd);
                let leap_mark = if boundary.leap { " (leap)" } else { "" };
                println!(
                    "month {:>2}{}: starts {:04}-{:02}-{:02} (JDN {})",
                    boundary.month, leap_mark, gy, gm, gd, boundary.jd
                );
            }
        }

        Commands::Jdn { day, month, year } => {
            let jdn = jdn_from_gregorian(day, month, year);
            let lunar = lunar_date_for(day, month, year);
            println!("JDN {jdn}");
            if lunar.is_valid() {
                let leap_mark = if lunar.leap { " leap" } else { "" };
                println!(
                    "lunar {:02}/{:02}{}/{}",
                    lunar.day, lunar.month, leap_mark, lunar.year
                );
            }
        }
    }
}
