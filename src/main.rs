use sysdash::config::load_config;
use sysdash::display::{self, Theme};
use sysdash::utils::command::run_interactive;
use sysdash::{actions, collect_facts};

fn main() {
    let config = load_config();
    let theme = Theme::from_config(&config);

    loop {
        display::clear_screen();
        display::render_facts(&collect_facts(), &theme, &config);

        // Install/disk summaries; purely informational, failures ignored.
        let _ = run_interactive("yay -P --stats");
        let _ = run_interactive(
            "dysk -c label+default --filter 'disk <> HDD' --sort filesystem -u binary",
        );
        let _ = run_interactive(
            "dysk -c label+default --filter 'disk <> SSD' --sort filesystem -u binary",
        );

        display::draw_menu_box(&theme);

        match display::read_menu_choice().as_str() {
            "r" => actions::remove_all_cache(&theme),
            "f" => actions::freemem(&theme),
            "d" => actions::open_file_manager(),
            "c" => actions::check_updates(&theme),
            "u" => actions::install_updates(&theme),
            "i" => actions::list_install_history(&theme),
            "a" => actions::full_system_audit(&theme),
            "q" => break,
            _ => std::process::exit(1),
        }
    }
}
