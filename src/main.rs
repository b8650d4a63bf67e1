//! Kana Drop entry point
//!
//! The browser build starts from `platform::web`. Natively this runs a
//! headless autoplay session: the autopilot steers each character (mostly
//! into the right column) at 60 Hz and the results are logged.
//!
//! Usage: `kana-drop [seed] [landings]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use kana_drop::input::autopilot_target;
    use kana_drop::persistence::MemoryStore;
    use kana_drop::GameDriver;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42u64);
    let landings: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(25);
    log::info!("Kana Drop (native autoplay) seed {} for {} landings", seed, landings);

    let mut driver = GameDriver::new(MemoryStore::new(), seed);
    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    driver.start(now);

    let mut landed = 0;
    while landed < landings {
        now += frame_ms;
        let state = driver.game().state();
        // Miss roughly every fourth character
        let aim_correct = state.round % 4 != 0;
        if let Some(x) = autopilot_target(state, aim_correct) {
            driver.steer(x);
        }
        if let Some(event) = driver.frame(now) {
            landed += 1;
            let state = driver.game().state();
            if let Some(feedback) = &state.feedback {
                log::info!(
                    "Round {}: {} -> {} ({})",
                    state.round,
                    feedback.character,
                    feedback.guessed_choice.romaji,
                    feedback.message.en
                );
            }
            if event.round_complete {
                log::info!("Round complete, holding for {} ms", event.advance_delay_ms());
            }
        }
    }

    let state = driver.game().state();
    println!(
        "{} correct, {} wrong, {}s elapsed",
        state.score.correct, state.score.wrong, state.elapsed_time
    );
    for character in state.stats.weakest(3) {
        let Some(stats) = state.stats.get(character) else {
            continue;
        };
        println!(
            "Weakest: {} ({} of {} correct)",
            character,
            stats.correct,
            stats.attempts()
        );
    }
    driver.stop();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser entry point is platform::web::init
}
