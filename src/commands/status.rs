use anyhow::Result;

use captains_log::db::Database;
use captains_log::gamification::XP_PER_LEVEL;
use captains_log::Dashboard;

const BAR_WIDTH: u32 = 20;

fn xp_bar(into_level: u32) -> String {
    let filled = (into_level * BAR_WIDTH / XP_PER_LEVEL) as usize;
    let empty = BAR_WIDTH as usize - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

pub fn run(dashboard: &Dashboard<Database>) -> Result<()> {
    let game = dashboard.gamification();
    let state = game.state();
    let rank = game.rank();

    println!("{} {} (level {})", rank.icon(), rank, state.captain_level);
    println!(
        "XP:    {} {}/{}",
        xp_bar(game.xp_into_level()),
        game.xp_into_level(),
        XP_PER_LEVEL
    );
    println!("Coins: {}", state.pirate_coins);

    let stats = dashboard.stats();
    println!();
    println!("Quests complete:  {}", stats.quests_complete);
    println!("Active missions:  {}", stats.active_missions);
    println!("Voyages:          {}", stats.voyages);
    println!("Upcoming events:  {}", stats.upcoming_events);

    Ok(())
}
