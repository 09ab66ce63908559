//! ASCII art pictures for the drip animation showcase.

/// Idle figure lifting a dumbbell (12 lines tall, 24 chars wide).
pub const HEAVY_IDLE: [&str; 12] = [
    "         ▄████▄         ",
    "        ████████        ",
    "        ██ ██ ██        ",
    "         ██████         ",
    "██▌  ▄████████████▄  ▐██",
    "██████████████████████▌█",
    "██▌  ████████████████▐██",
    "     ████████████████   ",
    "      ██████████████    ",
    "       ████    ████     ",
    "       ████    ████     ",
    "     ██████    ██████   ",
];

/// Width in columns of the widest line of `art`.
pub fn art_width(art: &[&str]) -> usize {
    art.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

/// Resample `art` by `factor` using nearest-neighbour lookup. Lines are
/// padded to a common width first; a factor of zero or less yields no
/// lines.
pub fn scale_art(art: &[&str], factor: f64) -> Vec<String> {
    if art.is_empty() || factor <= 0.0 || !factor.is_finite() {
        return Vec::new();
    }

    let width = art_width(art);
    let rows: Vec<Vec<char>> = art
        .iter()
        .map(|line| {
            let mut chars: Vec<char> = line.chars().collect();
            chars.resize(width, ' ');
            chars
        })
        .collect();

    let out_height = (art.len() as f64 * factor).round() as usize;
    let out_width = (width as f64 * factor).round() as usize;

    (0..out_height)
        .map(|y| {
            let src_y = ((y as f64 / factor) as usize).min(rows.len() - 1);
            (0..out_width)
                .map(|x| {
                    let src_x = ((x as f64 / factor) as usize).min(width.saturating_sub(1));
                    rows[src_y].get(src_x).copied().unwrap_or(' ')
                })
                .collect()
        })
        .collect()
}
