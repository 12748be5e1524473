//! Prefilter summary report generation

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use polars::prelude::*;
use std::collections::BTreeMap;

use crate::pipeline::{flagged_count, PREFILTER_COLUMN};

/// Summary of one prefilter run, built from the finished feature table.
#[derive(Debug, Default)]
pub struct PrefilterSummary {
    pub performed: bool,
    pub total_features: usize,
    pub flagged_features: usize,
    /// Per-compartment (total, flagged) counts, sorted by compartment name.
    pub compartments: BTreeMap<String, (usize, usize)>,
}

impl PrefilterSummary {
    /// Tally the feature table. `performed` records whether prefiltering ran
    /// or the table was written with a uniformly-false indicator.
    pub fn from_table(df: &DataFrame, performed: bool) -> Result<Self> {
        let compartment_col = df.column("compartment")?.as_materialized_series().clone();
        let flag_col = df.column(PREFILTER_COLUMN)?.as_materialized_series().clone();

        let mut compartments: BTreeMap<String, (usize, usize)> = BTreeMap::new();

        for (compartment, flagged) in compartment_col.str()?.into_iter().zip(flag_col.bool()?) {
            let Some(compartment) = compartment else {
                continue;
            };
            let entry = compartments.entry(compartment.to_string()).or_default();
            entry.0 += 1;
            if flagged.unwrap_or(false) {
                entry.1 += 1;
            }
        }

        Ok(Self {
            performed,
            total_features: df.height(),
            flagged_features: flagged_count(df)?,
            compartments,
        })
    }

    /// Number of features carried into profile construction.
    pub fn retained_features(&self) -> usize {
        self.total_features - self.flagged_features
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("◆").cyan(),
            style("PREFILTER SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Compartment").add_attribute(Attribute::Bold),
            Cell::new("Features").add_attribute(Attribute::Bold),
            Cell::new("Flagged").add_attribute(Attribute::Bold),
        ]);

        for (compartment, (total, flagged)) in &self.compartments {
            table.add_row(vec![
                Cell::new(compartment),
                Cell::new(total),
                Cell::new(flagged).fg(if *flagged == 0 {
                    Color::White
                } else {
                    Color::Yellow
                }),
            ]);
        }

        table.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new(self.total_features).add_attribute(Attribute::Bold),
            Cell::new(self.flagged_features)
                .fg(if self.flagged_features == 0 {
                    Color::White
                } else {
                    Color::Yellow
                })
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "      {} feature(s) retained for profile construction",
            style(self.retained_features()).green().bold()
        );
        if !self.performed {
            println!(
                "      {}",
                style("Prefiltering skipped (perform: false); nothing was flagged").dim()
            );
        }
    }
}
