//! Prompt templates for impact narratives

use crate::types::{ImpactFigures, Location};

/// Prompt builder for narrative analysis
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the impact analysis prompt
    pub fn impact_prompt(figures: &ImpactFigures, location: &Location) -> String {
        format!(
            r#"You are an expert in astrophysics and risk communication. Analyze the impact of a meteorite CONCISELY.

IMPACT DATA:
- Diameter: {diameter:.2} meters
- Energy: {energy:.2} megatons of TNT
- Estimated crater diameter: {crater:.2} meters
- Location (Lat/Lng): {lat}, {lng}

INSTRUCTIONS FOR YOUR RESPONSE:
1. Area description: in ONE SENTENCE, describe the kind of area at the location.
2. Damage analysis: in ONE SHORT PARAGRAPH (4 or 5 lines at most), summarize the most devastating immediate effects of the impact.
3. Do not use lists, asterisks, or overly technical language. Be direct and clear."#,
            diameter = figures.diameter_m,
            energy = figures.energy_megatons,
            crater = figures.crater_diameter_m,
            lat = location.lat,
            lng = location.lng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_figures() {
        let figures = ImpactFigures {
            diameter_m: 370.0,
            velocity_km_s: 25.0,
            density_kg_m3: 2600.0,
            energy_megatons: 5152.347,
            crater_diameter_m: 7021.1,
        };
        let location = Location {
            lat: 19.43,
            lng: -99.13,
        };

        let prompt = PromptBuilder::impact_prompt(&figures, &location);
        assert!(prompt.contains("Diameter: 370.00 meters"));
        assert!(prompt.contains("Energy: 5152.35 megatons"));
        assert!(prompt.contains("19.43, -99.13"));
    }
}
