//! Human-readable report of a loaded configuration.

use anstream::println;
use overlook_config::{Config, DrawArgs, DrawBox};

use crate::stylesheet::Stylesheet;

/// Option bits paired with their configuration keywords, for display
const ARG_KEYWORDS: &[(DrawArgs, &str)] = &[
    (DrawArgs::QMIN_BARS, "qmin_bars"),
    (DrawArgs::QMIN, "qmin"),
    (DrawArgs::MIN, "min"),
    (DrawArgs::HOUR, "hour"),
    (DrawArgs::DAY, "day"),
    (DrawArgs::WEEK, "week"),
    (DrawArgs::YEAR, "year"),
    (DrawArgs::IP, "ip"),
    (DrawArgs::STATE, "state"),
    (DrawArgs::ACCESS, "access"),
];

/// Prints the effective poll schedule and the declared layout
pub fn print_report(config: &Config, styles: &Stylesheet) {
    println!("{}", styles.heading.style("polling"));
    for server in config.servers() {
        let cadence = server.effective_waittime(config.waittime());
        println!(
            "  {} every {}",
            server.address(),
            styles.value.style(format!("{cadence}s"))
        );
    }

    match config.layout() {
        None => println!("{} none declared", styles.heading.style("layout")),
        Some(layout) => {
            println!("{}", styles.heading.style("layout"));
            println!(
                "  header: {}",
                styles.value.style(if layout.header() { "shown" } else { "hidden" })
            );
            if layout.errlog() == 0 {
                println!("  errlog: {}", styles.value.style("disabled"));
            } else {
                println!(
                    "  errlog: {} lines",
                    styles.value.style(layout.errlog().to_string())
                );
            }
            for draw_box in layout.boxes() {
                println!("  box: {}", describe_box(*draw_box));
            }
        }
    }
}

fn describe_box(draw_box: DrawBox) -> String {
    let options: Vec<&str> = ARG_KEYWORDS
        .iter()
        .filter(|(flag, _)| draw_box.args().contains(*flag))
        .map(|&(_, keyword)| keyword)
        .collect();

    if options.is_empty() {
        draw_box.category().to_string()
    } else {
        format!("{} [{}]", draw_box.category(), options.join(" "))
    }
}
