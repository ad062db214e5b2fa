//! Squadron campaign simulation
//!
//! Hires a roster off the candidate boards, outfits a flight of fighters,
//! accepts a contract, and flies every mission to the end, printing the
//! run as it goes.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starlance::catalog::{CampaignCatalog, EquipmentCatalog};
use starlance::core::error::Result;
use starlance::ledger::{SquadronLedger, TaskForce};
use starlance::model::equipment::EquipmentKind;
use starlance::model::fighter::EquipmentSlot;
use starlance::recruit::{self, RankTier};
use starlance::resolver;

/// Squadron campaign simulation
#[derive(Parser, Debug)]
#[command(name = "squadron_sim")]
#[command(about = "Fly a full campaign with a generated mercenary squadron")]
struct Args {
    /// Campaign to accept from the contract board
    #[arg(long, default_value = "Border Skirmish")]
    campaign: String,

    /// Pilots to hire (one fighter per pilot)
    #[arg(long, default_value_t = 4)]
    roster: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// The natural mounting slot for an item kind
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

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose {
            "starlance=debug"
        } else {
            "starlance=info"
        })
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    // Generation rng is separate from the ledger's resolution rng
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║           STARLANCE: SQUADRON CAMPAIGN SIMULATION            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Seed: {}\n", seed);

    let mut ledger = SquadronLedger::with_seed(seed);
    let shop = EquipmentCatalog::with_defaults();
    let board = CampaignCatalog::with_defaults();

    let campaign = match board.get(&args.campaign) {
        Some(c) => c.clone(),
        None => {
            eprintln!("Unknown campaign '{}'. On offer:", args.campaign);
            for c in board.all() {
                eprintln!(
                    "  {} - {} ({} missions, {} credit bonus)",
                    c.name,
                    c.description,
                    c.missions.len(),
                    c.reward
                );
            }
            return Ok(());
        }
    };

    println!("═══ HIRING ═══");
    let mut force = TaskForce::default();
    for _ in 0..args.roster {
        // Three candidates per board; take the strongest stick
        let candidates = recruit::candidate_pool(RankTier::Elite, 3, &mut rng);
        let best = candidates
            .into_iter()
            .max_by(|a, b| {
                a.skills
                    .combat_average()
                    .total_cmp(&b.skills.combat_average())
            })
            .unwrap();
        let cost = recruit::hire_cost(best.level);
        println!(
            "  {} '{}' ({}, level {}) hired for {} credits",
            best.name, best.call_sign, best.rank, best.level, cost
        );
        force.pilots.push(best.id);
        ledger.hire_pilot(best, cost)?;
    }

    println!("\n═══ HANGAR ═══");
    for _ in 0..args.roster {
        let fighter = recruit::generate_fighter(&mut rng);
        println!("  New hull: {}", fighter.name);
        force.fighters.push(fighter.id);
        ledger.add_fighter(fighter)?;
    }

    let loadout_plan = [
        "Basic Laser Cannon",
        "Standard Shield Generator",
        "Ion Engine",
        "AIM-120 AMRAAM",
        "MJU-7/B Flares",
    ];
    for &fighter_id in &force.fighters {
        for name in loadout_plan {
            let template = shop.get(name).unwrap();
            let item_id = ledger.purchase_equipment(template)?;
            ledger.install_equipment(fighter_id, item_id, slot_for(template.kind))?;
        }
    }
    println!(
        "  Outfitted {} fighters ({} items mounted)",
        force.fighters.len(),
        ledger.squadron().total_equipment_count()
    );

    for n in 0..args.roster {
        ledger.assign_pilot(force.fighters[n], force.pilots[n])?;
    }

    println!("\n═══ ROSTER ═══");
    for pilot in &ledger.squadron().pilots {
        println!(
            "  {} '{}' ({}, lvl {}) - combat {:.0}, kills {}/{}",
            pilot.name,
            pilot.call_sign,
            pilot.rank,
            pilot.level,
            pilot.skills.combat_average(),
            pilot.combat_record.air_to_air_kills,
            pilot.combat_record.ground_target_kills
        );
    }
    println!(
        "\nSquadron strength: {:.1}   Combat rating: {:.1}   Credits: {}",
        resolver::squadron_strength(&ledger.squadron().pilots),
        resolver::combat_rating(&ledger.squadron().pilots),
        ledger.squadron().credits
    );

    println!("\n═══ CAMPAIGN: {} ═══", campaign.name);
    println!("{}", campaign.description);
    ledger.start_campaign(campaign)?;

    let mut days = 0;
    loop {
        let next = ledger
            .squadron()
            .active_campaign
            .as_ref()
            .and_then(|c| c.missions.first())
            .map(|m| (m.id, m.name.clone(), m.duration_days));
        let (mission_id, mission_name, duration) = match next {
            Some(m) => m,
            None => break,
        };

        println!("\n>>> Mission: {}", mission_name);
        let outcome = ledger.execute_mission(mission_id, &force)?;
        days += duration;

        println!(
            "    {} (chance {:.1}%)",
            if outcome.success { "SUCCESS" } else { "FAILURE" },
            outcome.chance
        );
        if outcome.success {
            println!("    Reward: {} credits", outcome.reward);
        }
        for id in &outcome.injured {
            if let Some(pilot) = ledger.squadron().pilot(*id) {
                println!("    Injured: '{}'", pilot.call_sign);
            }
        }
        if outcome.equipment_lost {
            println!("    Equipment lost in the engagement");
        }
        if outcome.fighters_damaged {
            println!("    Fighters took damage");
        }
    }

    let squadron = ledger.squadron();
    println!("\n═══════════════════════════════════════════════════════════════");
    println!("                       CAMPAIGN COMPLETE");
    println!("═══════════════════════════════════════════════════════════════\n");
    println!("  Days in the field: {}", days);
    println!("  Credits: {}", squadron.credits);
    println!("  Reputation: {}", squadron.reputation);
    println!("  Roster:");
    for pilot in &squadron.pilots {
        println!("    {} '{}' - {:?}", pilot.name, pilot.call_sign, pilot.status);
    }

    Ok(())
}
