use clap::{Parser, Subcommand};
use jataka::{BirthDetails, ChartOptions, NatalChart, compare_charts};
use jataka_time::{UtcInstant, calendar_to_jd};
use jataka_vedic::dasha::{ALL_DASHA_SYSTEMS, DashaPeriod, DashaSpan, DashaSystem};
use jataka_vedic::{ElementKind, GeoLocation, deg_to_dms, elements_for_day, sun_rise_set};

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka natal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart for a birth
    Chart {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        datetime: String,
        /// Geographic latitude, degrees north
        #[arg(long)]
        lat: f64,
        /// Geographic longitude, degrees east
        #[arg(long)]
        lon: f64,
        /// UTC offset in hours (e.g. 5.75 for Nepal)
        #[arg(long)]
        offset: f64,
        /// Name of the native
        #[arg(long, default_value = "native")]
        name: String,
    },
    /// Panchang elements from sunrise to the next local midnight
    Panchang {
        /// Local datetime within the day (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        datetime: String,
        /// Geographic latitude, degrees north
        #[arg(long)]
        lat: f64,
        /// Geographic longitude, degrees east
        #[arg(long)]
        lon: f64,
        /// UTC offset in hours
        #[arg(long)]
        offset: f64,
    },
    /// Dasha timeline for a birth
    Dasha {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        datetime: String,
        /// Geographic latitude, degrees north
        #[arg(long)]
        lat: f64,
        /// Geographic longitude, degrees east
        #[arg(long)]
        lon: f64,
        /// UTC offset in hours
        #[arg(long)]
        offset: f64,
        /// System: vimshottari, tribhagi, yogini, ashtottari, chara
        #[arg(long, default_value = "vimshottari")]
        system: String,
    },
    /// Guna Milan compatibility between two births
    Match {
        /// Groom local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        groom_datetime: String,
        /// Groom latitude, degrees north
        #[arg(long)]
        groom_lat: f64,
        /// Groom longitude, degrees east
        #[arg(long)]
        groom_lon: f64,
        /// Groom UTC offset in hours
        #[arg(long)]
        groom_offset: f64,
        /// Bride local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        bride_datetime: String,
        /// Bride latitude, degrees north
        #[arg(long)]
        bride_lat: f64,
        /// Bride longitude, degrees east
        #[arg(long)]
        bride_lon: f64,
        /// Bride UTC offset in hours
        #[arg(long)]
        bride_offset: f64,
    },
}

fn details(name: &str, datetime: &str, lat: f64, lon: f64, offset: f64) -> BirthDetails {
    BirthDetails {
        name: name.to_string(),
        datetime: datetime.to_string(),
        latitude: lat,
        longitude: lon,
        utc_offset_hours: offset,
    }
}

fn compute_or_exit(details: &BirthDetails) -> NatalChart {
    match NatalChart::compute(details, &ChartOptions::default()) {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Chart computation failed: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_system(s: &str) -> DashaSystem {
    let lowered = s.to_ascii_lowercase();
    match ALL_DASHA_SYSTEMS
        .iter()
        .find(|sys| sys.name().to_ascii_lowercase() == lowered)
    {
        Some(&sys) => sys,
        None => {
            eprintln!("Invalid dasha system: {s}");
            eprintln!("Valid: vimshottari, tribhagi, yogini, ashtottari, chara");
            std::process::exit(1);
        }
    }
}

fn span_text(span: &DashaSpan) -> String {
    match span {
        DashaSpan::Timed { start_jd_ut, end_jd_ut } => format!(
            "{} .. {}",
            UtcInstant::from_jd_ut(*start_jd_ut),
            UtcInstant::from_jd_ut(*end_jd_ut)
        ),
        DashaSpan::Unavailable => "unavailable".to_string(),
    }
}

fn print_periods(periods: &[DashaPeriod]) {
    for period in periods {
        println!("  {:<12} {}", period.lord.name(), span_text(&period.span));
        for sub in &period.sub_periods {
            println!("    {:<12} {}", sub.lord.name(), span_text(&sub.span));
        }
    }
}

fn print_chart(chart: &NatalChart) {
    println!("Natal chart for {}", chart.details.name);
    println!(
        "  {} at lat {:.4} lon {:.4} (UTC{:+.2})",
        chart.details.datetime, chart.details.latitude, chart.details.longitude,
        chart.details.utc_offset_hours
    );
    println!(
        "  Ayanamsha: {} {:.4} deg | computed {}",
        chart.info.ayanamsha_name, chart.info.ayanamsha_deg, chart.info.computed_at_utc
    );
    println!();

    println!(
        "Lagna: {} ({}) - {} in sign",
        chart.ascendant_rashi.name(),
        chart.ascendant_rashi.western_name(),
        deg_to_dms(chart.ascendant % 30.0)
    );
    println!("Grahas:");
    for p in &chart.positions {
        println!(
            "  {:<8} ({:<7}) {:>10.4} deg  {:<10} {:>7.4} in sign  pada {}{}",
            p.graha.name(),
            p.graha.english_name(),
            p.longitude,
            p.rashi.name(),
            p.degrees_in_sign,
            p.pada,
            if p.retrograde { "  (R)" } else { "" }
        );
    }
    println!();

    println!("Panchang:");
    for report in [&chart.tithi, &chart.nakshatra, &chart.yoga, &chart.karana] {
        println!(
            "  {:<16} {} .. {}",
            report.name,
            report.start_utc.as_deref().unwrap_or("N/A"),
            report.end_utc.as_deref().unwrap_or("N/A")
        );
    }
    println!(
        "  Sunrise {}  Sunset {}  Moonrise {}  Moonset {}",
        chart.sunrise, chart.sunset, chart.moonrise, chart.moonset
    );
    println!();

    println!("Divisional charts:");
    for dc in &chart.divisional_charts {
        print!("  {:<4} lagna {:<10}", dc.varga.name(), dc.ascendant_rashi.name());
        for p in &dc.positions {
            print!(" {}:{}", p.graha.name(), p.rashi.number());
        }
        println!();
    }
    println!();

    println!("Profile:");
    let prof = &chart.profile;
    println!(
        "  Varna {} | Vasya {} | Yoni {} | Gana {} | Nadi {} | Tatva {} | Paya {}",
        prof.varna.name(),
        prof.vasya.name(),
        prof.yoni.name(),
        prof.gana.name(),
        prof.nadi.name(),
        prof.tatva.name(),
        prof.paya.name()
    );
    println!(
        "  Rashi lord {} | Lagnesh {}",
        prof.rashi_lord.name(),
        prof.lagnesh.name()
    );
    println!();

    for timeline in &chart.dashas {
        println!("{} dasha:", timeline.system.name());
        print_periods(&timeline.periods);
        println!();
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { datetime, lat, lon, offset, name } => {
            let chart = compute_or_exit(&details(&name, &datetime, lat, lon, offset));
            print_chart(&chart);
        }

        Commands::Panchang { datetime, lat, lon, offset } => {
            let local = match jataka::request::parse_local_datetime(&datetime) {
                Ok(instant) => instant,
                Err(e) => {
                    eprintln!("Invalid datetime: {e}");
                    std::process::exit(1);
                }
            };
            let midnight_ut =
                calendar_to_jd(local.year, local.month, local.day as f64) - offset / 24.0;
            let site = GeoLocation { latitude_deg: lat, longitude_deg: lon };
            // The panchang day runs sunrise to the next local midnight;
            // without a sunrise (polar day/night) fall back to midnight.
            let day_start = sun_rise_set(midnight_ut, &site)
                .rise_jd_ut
                .unwrap_or(midnight_ut);
            let day_end = midnight_ut + 1.0;

            for kind in [
                ElementKind::Tithi,
                ElementKind::Nakshatra,
                ElementKind::Yoga,
                ElementKind::Karana,
            ] {
                println!("{kind:?}:");
                for e in elements_for_day(kind, day_start, day_end) {
                    println!(
                        "  {:<16} {} .. {}",
                        e.name(),
                        e.start_jd_ut
                            .map(|jd| UtcInstant::from_jd_ut(jd).to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                        e.end_jd_ut
                            .map(|jd| UtcInstant::from_jd_ut(jd).to_string())
                            .unwrap_or_else(|| "N/A".to_string())
                    );
                }
            }
        }

        Commands::Dasha { datetime, lat, lon, offset, system } => {
            let wanted = parse_system(&system);
            let chart = compute_or_exit(&details("native", &datetime, lat, lon, offset));
            match chart.dasha(wanted) {
                Some(timeline) => {
                    println!("{} dasha:", timeline.system.name());
                    print_periods(&timeline.periods);
                }
                None => {
                    eprintln!("Dasha system not computed: {system}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Match {
            groom_datetime,
            groom_lat,
            groom_lon,
            groom_offset,
            bride_datetime,
            bride_lat,
            bride_lon,
            bride_offset,
        } => {
            let groom =
                details("groom", &groom_datetime, groom_lat, groom_lon, groom_offset);
            let bride =
                details("bride", &bride_datetime, bride_lat, bride_lon, bride_offset);
            let cmp = match compare_charts(&groom, &bride, &ChartOptions::default()) {
                Ok(cmp) => cmp,
                Err(e) => {
                    eprintln!("Comparison failed: {e}");
                    std::process::exit(1);
                }
            };

            println!("Guna Milan:");
            for score in &cmp.milan.scores {
                println!(
                    "  {:<14} {:>4.1} / {:>4.1}",
                    score.name, score.obtained, score.maximum
                );
            }
            println!("  Total {:.1} / 36.0", cmp.milan.total);
            println!("{}", cmp.conclusion);
        }
    }
}
