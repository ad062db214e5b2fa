//! Headless Mission Runner
//!
//! Flies a catalog campaign over and over with freshly generated squadrons
//! and outputs JSON success statistics for balance tuning.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use starlance::catalog::{CampaignCatalog, EquipmentCatalog};
use starlance::ledger::{SquadronLedger, TaskForce};
use starlance::model::equipment::EquipmentKind;
use starlance::model::fighter::EquipmentSlot;
use starlance::recruit::{self, RankTier};

/// Headless Mission Runner - repeated campaign trials for balance tuning
#[derive(Parser, Debug)]
#[command(name = "mission_runner")]
#[command(about = "Run repeated campaign trials and output success statistics")]
struct Args {
    /// Campaign to trial from the contract board
    #[arg(long, default_value = "Border Skirmish")]
    campaign: String,

    /// Number of trials to fly
    #[arg(long, default_value_t = 100)]
    trials: u32,

    /// Pilots per trial squadron (one fighter per pilot)
    #[arg(long, default_value_t = 4)]
    roster: usize,

    /// Recruit tier to staff the squadron from: rookie, seasoned, or elite
    #[arg(long, default_value = "elite")]
    tier: String,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// Per-mission tallies across all trials
#[derive(Serialize)]
struct MissionStat {
    name: String,
    successes: u32,
    success_rate: f32,
}

/// JSON output structure
#[derive(Serialize)]
struct TrialStats {
    campaign: String,
    trials: u32,
    roster: usize,
    tier: String,
    missions: Vec<MissionStat>,
    full_sweeps: u32,
    full_sweep_rate: f32,
    avg_final_credits: f64,
    avg_final_reputation: f64,
    injuries_per_trial: f32,
    seed: u64,
}

fn slot_for(kind: EquipmentKind) -> EquipmentSlot {
    match kind {
        EquipmentKind::Weapon => EquipmentSlot::Weapon,
        EquipmentKind::Shield => EquipmentSlot::Shield,
        EquipmentKind::Engine => EquipmentSlot::Engine,
        EquipmentKind::Special => EquipmentSlot::Special,
        EquipmentKind::Missile => EquipmentSlot::Missiles,
        EquipmentKind::Bomb => EquipmentSlot::Bombs,
        EquipmentKind::Flare => EquipmentSlot::Flares,
    }
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());

    let tier = match args.tier.to_lowercase().as_str() {
        "rookie" => RankTier::Rookie,
        "seasoned" => RankTier::Seasoned,
        "elite" => RankTier::Elite,
        other => {
            eprintln!("Unknown tier '{}', defaulting to elite", other);
            RankTier::Elite
        }
    };

    let board = CampaignCatalog::with_defaults();
    let template = match board.get(&args.campaign) {
        Some(c) => c.clone(),
        None => {
            eprintln!("Unknown campaign '{}'. Available contracts:", args.campaign);
            for c in board.all() {
                eprintln!("  {}", c.name);
            }
            std::process::exit(1);
        }
    };
    let shop = EquipmentCatalog::with_defaults();
    let mission_names: Vec<String> = template.missions.iter().map(|m| m.name.clone()).collect();

    let mut successes = vec![0u32; mission_names.len()];
    let mut full_sweeps = 0u32;
    let mut total_credits = 0i64;
    let mut total_reputation = 0i64;
    let mut total_injuries = 0usize;

    for trial in 0..args.trials {
        // Two rng streams per trial: one resolves missions, one generates the squadron
        let trial_seed = seed.wrapping_add(trial as u64 * 2);
        let mut ledger = SquadronLedger::with_seed(trial_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(trial_seed.wrapping_add(1));

        let mut force = TaskForce::default();
        for _ in 0..args.roster {
            let pilot = recruit::generate_pilot(tier, &mut rng);
            let cost = recruit::hire_cost(pilot.level);
            force.pilots.push(pilot.id);
            if let Err(e) = ledger.hire_pilot(pilot, cost) {
                eprintln!("Trial {} could not staff the squadron: {}", trial, e);
                std::process::exit(1);
            }

            let fighter = recruit::generate_fighter(&mut rng);
            let fighter_id = fighter.id;
            force.fighters.push(fighter_id);
            if let Err(e) = ledger.add_fighter(fighter) {
                eprintln!("Trial {} could not buy fighters: {}", trial, e);
                std::process::exit(1);
            }
            for name in [
                "Basic Laser Cannon",
                "Standard Shield Generator",
                "Ion Engine",
                "AIM-120 AMRAAM",
                "MJU-7/B Flares",
            ] {
                let item = shop.get(name).unwrap();
                match ledger.purchase_equipment(item) {
                    Ok(item_id) => {
                        let slot = slot_for(item.kind);
                        ledger.install_equipment(fighter_id, item_id, slot).unwrap();
                    }
                    Err(e) => {
                        eprintln!("Trial {} could not outfit fighters: {}", trial, e);
                        std::process::exit(1);
                    }
                }
            }
            let pilot_id = *force.pilots.last().unwrap();
            ledger.assign_pilot(fighter_id, pilot_id).unwrap();
        }

        let campaign = template.clone();
        let mission_ids: Vec<_> = campaign.missions.iter().map(|m| m.id).collect();
        if let Err(e) = ledger.start_campaign(campaign) {
            eprintln!("Trial {} could not start '{}': {}", trial, args.campaign, e);
            std::process::exit(1);
        }

        let mut swept = true;
        for (idx, mission_id) in mission_ids.iter().enumerate() {
            let outcome = ledger.execute_mission(*mission_id, &force).unwrap();
            if outcome.success {
                successes[idx] += 1;
            } else {
                swept = false;
            }
            total_injuries += outcome.injured.len();
        }
        if swept {
            full_sweeps += 1;
        }

        total_credits += ledger.squadron().credits;
        total_reputation += ledger.squadron().reputation;
    }

    let trials = args.trials.max(1);
    let missions = mission_names
        .into_iter()
        .zip(&successes)
        .map(|(name, &wins)| MissionStat {
            name,
            successes: wins,
            success_rate: wins as f32 / trials as f32,
        })
        .collect();

    let result = TrialStats {
        campaign: args.campaign.clone(),
        trials: args.trials,
        roster: args.roster,
        tier: format!("{:?}", tier),
        missions,
        full_sweeps,
        full_sweep_rate: full_sweeps as f32 / trials as f32,
        avg_final_credits: total_credits as f64 / trials as f64,
        avg_final_reputation: total_reputation as f64 / trials as f64,
        injuries_per_trial: total_injuries as f32 / trials as f32,
        seed,
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        "text" => {
            println!("Campaign Trials");
            println!("===============");
            println!("Campaign: {}", result.campaign);
            println!("Trials: {} ({:?} roster of {})", result.trials, tier, result.roster);
            for stat in &result.missions {
                println!(
                    "  {}: {}/{} ({:.1}%)",
                    stat.name,
                    stat.successes,
                    result.trials,
                    stat.success_rate * 100.0
                );
            }
            println!(
                "Full sweeps: {} ({:.1}%)",
                result.full_sweeps,
                result.full_sweep_rate * 100.0
            );
            println!("Avg final credits: {:.1}", result.avg_final_credits);
            println!("Avg reputation: {:.1}", result.avg_final_reputation);
            println!("Injuries per trial: {:.2}", result.injuries_per_trial);
            println!("Seed: {}", result.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
    }
}
