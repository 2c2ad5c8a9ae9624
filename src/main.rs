use skyskills::hypixel::{CancelToken, HypixelClient};
use skyskills::lookup::{lookup_player, PlayerReport};
use skyskills::profile::extract::KillFilter;
use skyskills::profile::level::xp_to_next_level;
use skyskills::snapshot::{ProfileSnapshot, SnapshotStore};
use skyskills::stats::trophy::TrophyTier;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    let mut ign: Option<&str> = None;
    let mut kills = KillFilter::FishingOnly;
    let mut record_snapshots = true;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("skyskills {}", VERSION);
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--all-kills" => kills = KillFilter::All,
            "--no-snapshot" => record_snapshots = false,
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(2);
            }
            other => ign = Some(other),
        }
    }

    let ign = match ign {
        Some(name) => name,
        None => {
            print_help();
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let api_key = std::env::var("HYPIXEL_API_KEY").ok();
    let client = HypixelClient::new(api_key);
    let cancel = CancelToken::new();

    let report = match lookup_player(&client, ign, kills, &cancel) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Lookup failed: {}", e);
            std::process::exit(1);
        }
    };

    print_report(&report);

    if record_snapshots {
        for profile in &report.profiles {
            let snapshot = ProfileSnapshot::capture(
                report.uuid,
                &report.ign,
                profile.raw.clone(),
                &profile.stats,
                profile.derived.clone(),
            );
            if let Err(e) = SnapshotStore::record(&snapshot) {
                eprintln!("Warning: could not record snapshot: {}", e);
            }
        }
    }
}

fn print_help() {
    println!("Skyskills - Hypixel Skyblock fishing stats\n");
    println!("Usage: skyskills [OPTIONS] <ign>\n");
    println!("Options:");
    println!("  --all-kills    Show the full bestiary, not just sea creatures");
    println!("  --no-snapshot  Do not record a snapshot of this lookup");
    println!("  -v, --version  Print version");
    println!("  -h, --help     Print this help");
    println!();
    println!("Set HYPIXEL_API_KEY for authenticated (higher rate limit) requests.");
}

fn print_report(report: &PlayerReport) {
    println!("Player: {} ({})", report.ign, report.uuid);

    for profile in &report.profiles {
        let name = profile.stats.cute_name.as_deref().unwrap_or("unnamed");
        println!();
        println!("== Profile \"{}\" ==", name);
        match xp_to_next_level(profile.stats.fishing_xp) {
            Some(remaining) => println!(
                "  Fishing level {} ({:.0} xp, {} to next level)",
                profile.stats.fishing_level, profile.stats.fishing_xp, remaining
            ),
            None => println!(
                "  Fishing level {} ({:.0} xp, max)",
                profile.stats.fishing_level, profile.stats.fishing_xp
            ),
        }

        let trophy = &profile.derived.trophy_fish;
        if trophy.total_caught > 0 {
            println!("  Trophy fish: {} caught", trophy.total_caught);
            for tier in TrophyTier::ALL {
                let count = trophy.by_tier.get(tier);
                if count > 0 {
                    println!("    {:8} {}", tier.name(), count);
                }
            }
        } else {
            println!("  Trophy fish: none");
        }

        let creatures = &profile.derived.sea_creatures;
        println!(
            "  Sea creatures: {} kills across {} types",
            creatures.total_kills, creatures.unique_types
        );
        for (creature_name, count) in &creatures.notable {
            println!("    {:18} {}", creature_name, count);
        }

        if !profile.derived.recommendations.is_empty() {
            println!("  Recommendations:");
            for recommendation in &profile.derived.recommendations {
                println!("    {}", recommendation);
            }
        }
    }
}
