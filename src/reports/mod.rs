use crate::cmd::score::ScoreRow;
use cipherforge::consts::ALPHABET;
use cipherforge::key::Key;
use cipherforge::optimizer::SearchOutcome;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Summary lines first (stable, grep-friendly), then the key and stats tables.
pub fn print_outcome(outcome: &SearchOutcome) {
    println!("Score: {:.4}", outcome.score);
    println!("Key: {}", outcome.key);
    println!("Plaintext: {}", outcome.plaintext);

    print_key_table(&outcome.key);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stopped").add_attribute(Attribute::Bold),
        Cell::new("Restarts"),
        Cell::new("Trials"),
        Cell::new("Time (s)"),
        Cell::new("Trials/s"),
        Cell::new("Seed"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let rate = if outcome.elapsed_secs > 0.0 {
        outcome.trials as f64 / outcome.elapsed_secs
    } else {
        0.0
    };

    table.add_row(vec![
        Cell::new(outcome.stop_reason.to_string()).fg(Color::Cyan),
        Cell::new(outcome.restarts),
        Cell::new(outcome.trials),
        Cell::new(format!("{:.2}", outcome.elapsed_secs)),
        Cell::new(format!("{:.0}", rate)),
        Cell::new(outcome.seed),
    ]);
    println!("\n{}", table);
}

/// Two-row grid: plaintext alphabet over the cipher letters it maps to.
pub fn print_key_table(key: &Key) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut plain = vec![Cell::new("Plain").add_attribute(Attribute::Bold)];
    plain.extend(
        ALPHABET
            .chars()
            .map(|c| Cell::new(c).set_alignment(CellAlignment::Center)),
    );

    let mut cipher = vec![Cell::new("Cipher").add_attribute(Attribute::Bold)];
    cipher.extend(key.to_alphabet().chars().map(|c| {
        Cell::new(c)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Center)
    }));

    table.add_row(plain);
    table.add_row(cipher);
    println!("\n{}", table);
}

pub fn print_score_table(rows: &[ScoreRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Letters"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let best = rows
        .iter()
        .filter_map(|r| r.score)
        .min_by(|a, b| a.total_cmp(b));

    for row in rows {
        let text = if row.text.chars().count() > 48 {
            let head: String = row.text.chars().take(45).collect();
            format!("{}...", head)
        } else {
            row.text.clone()
        };

        let score_cell = match row.score {
            Some(s) if Some(s) == best => Cell::new(format!("{:.4}", s))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            Some(s) => Cell::new(format!("{:.4}", s)),
            None => Cell::new("-").fg(Color::Red),
        };

        table.add_row(vec![Cell::new(text), Cell::new(row.letters), score_cell]);
    }
    println!("{}", table);
}
