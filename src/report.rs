//! Report assembly and text rendering for the CLI.

use std::fmt::Write;

use serde::Serialize;

use calimea_bazi::{ArchetypeProfile, Band, BandWeights, DayMasterInfo, derive_band_weights};
use calimea_vitality::{
    EnergyForecast, Stage, VitalityGuidance, vitality_from_weights, vitality_guidance,
};

/// Everything the `chart` subcommand prints.
#[derive(Debug, Serialize)]
pub struct ChartReport {
    pub info: DayMasterInfo,
    pub band_weights: BandWeights,
    pub vitality: u8,
    pub archetype: ArchetypeProfile,
    pub guidance: &'static VitalityGuidance,
}

impl ChartReport {
    pub fn new(info: DayMasterInfo) -> Self {
        let band_weights = derive_band_weights(&info.four_pillars);
        let vitality = vitality_from_weights(&band_weights);
        let archetype = ArchetypeProfile::from_info(&info);
        Self {
            info,
            band_weights,
            vitality,
            archetype,
            guidance: vitality_guidance(vitality.into()),
        }
    }
}

pub fn render_chart(report: &ChartReport) -> String {
    let info = &report.info;
    let chart = &info.four_pillars;
    let mut out = String::new();
    // fmt::Write into a String cannot fail.
    let _ = writeln!(out, "Day Master: {}", info.full_name);
    let _ = writeln!(out, "Archetype:  {}", info.label);
    let _ = writeln!(out, "Affinity:   {:.2}", info.affinity);
    let _ = writeln!(out, "Four Pillars:");
    for (name, pillar) in ["Year", "Month", "Day", "Hour"].iter().zip(chart.pillars()) {
        let _ = writeln!(
            out,
            "  {name:<5} {} ({} {})",
            pillar.script(),
            pillar.stem.name,
            pillar.branch.name
        );
    }
    let _ = writeln!(out, "Bands:");
    for (band, descriptor) in Band::ALL.iter().zip(&report.archetype.mappings) {
        let _ = writeln!(
            out,
            "  {:<9} {:>3}%  {}",
            band.as_str(),
            report.band_weights.get(*band),
            descriptor.function
        );
    }
    let _ = writeln!(out, "Vitality:   {}%", report.vitality);
    out.push_str(&render_guidance(report.guidance));
    out
}

pub fn render_guidance(guidance: &VitalityGuidance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Guidance:   {} ({:?})", guidance.label, guidance.level);
    for item in guidance.dos {
        let _ = writeln!(out, "  + {item}");
    }
    for item in guidance.donts {
        let _ = writeln!(out, "  - {item}");
    }
    out
}

pub fn render_forecast(forecast: &EnergyForecast) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hourly:");
    for h in &forecast.hourly {
        let _ = writeln!(out, "  {}  {:>3}", h.time, h.score);
    }
    let _ = writeln!(out, "Daily:");
    for d in &forecast.daily {
        let _ = writeln!(out, "  {}  {:>3}", d.day, d.score);
    }
    let _ = writeln!(out, "Weekly: {}", forecast.weekly);
    out
}

pub fn render_workflow(stages: &[&Stage]) -> String {
    let mut out = String::new();
    for stage in stages {
        let _ = writeln!(out, "{}. {} ({})", stage.order, stage.label(), stage.script);
        for protocol in stage.protocol_entries() {
            let _ = writeln!(
                out,
                "   * {} [{:.1}s]",
                protocol.name,
                protocol.duration().as_secs_f64()
            );
            let _ = writeln!(out, "     {}", protocol.instruction);
            let _ = writeln!(out, "     \"{}\"", protocol.action);
        }
    }
    out
}
