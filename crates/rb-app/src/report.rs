use std::fmt::Write as _;

use anyhow::Result;

use crate::session::Outcome;

/// Hauteurs de barre, du plus bas au plus haut.
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Bars never drop below this share of full height.
const MIN_BAR: f32 = 0.04;

/// One character per waveform point.
#[must_use]
pub fn waveform_line(points: &[f32]) -> String {
    points
        .iter()
        .map(|&amp| {
            let level = amp.clamp(MIN_BAR, 1.0);
            let idx = (level * BARS.len() as f32).ceil() as usize;
            BARS[idx.clamp(1, BARS.len()) - 1]
        })
        .collect()
}

/// Carte de résultat texte : saveur, description, détails d'analyse, forme d'onde.
#[must_use]
pub fn render_card(outcome: &Outcome) -> String {
    let a = &outcome.analysis;
    let f = &outcome.flavour;
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out, "{}", f.rumble_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", f.name);
    let _ = writeln!(out, "  {}", f.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Rumble Analysis");
    let _ = writeln!(out, "  Duration:           {:.2}s", a.duration);
    let _ = writeln!(out, "  Volume Level:       {:.0}%", a.volume_coordinate * 100.0);
    let _ = writeln!(out, "  Pitch Level:        {:.0}%", a.pitch_coordinate * 100.0);
    let _ = writeln!(out, "  Dominant Frequency: {:.0} Hz", a.dominant_pitch);
    if !outcome.waveform.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", waveform_line(&outcome.waveform));
    }
    out
}

/// Sortie JSON : `{ analysis, flavour, waveform }`.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb_core::analysis::AudioAnalysis;
    use rb_core::flavour::SEABROOK_FLAVOURS;

    fn outcome() -> Outcome {
        Outcome {
            analysis: AudioAnalysis {
                average_volume: 0.1,
                dominant_pitch: 223.6,
                duration: 2.5,
                pitch_coordinate: 0.5,
                volume_coordinate: 0.4,
            },
            flavour: SEABROOK_FLAVOURS[2].clone(),
            waveform: vec![0.0, 0.5, 1.0],
        }
    }

    #[test]
    fn card_lists_details() {
        let card = render_card(&outcome());
        assert!(card.starts_with("A perfectly balanced rumble"));
        assert!(card.contains("Cheese & Onion"));
        assert!(card.contains("Duration:           2.50s"));
        assert!(card.contains("Volume Level:       40%"));
        assert!(card.contains("Pitch Level:        50%"));
        assert!(card.contains("Dominant Frequency: 224 Hz"));
        assert!(card.trim_end().ends_with("▁▄█"));
    }

    #[test]
    fn waveform_bars_have_a_floor() {
        assert_eq!(waveform_line(&[0.0, 0.04, 2.0]), "▁▁█");
        assert_eq!(waveform_line(&[0.3]).chars().count(), 1);
        assert!(waveform_line(&[]).is_empty());
    }

    #[test]
    fn json_uses_camel_case_analysis() -> Result<()> {
        let text = render_json(&outcome())?;
        let v: serde_json::Value = serde_json::from_str(&text)?;
        assert_eq!(v["analysis"]["volumeCoordinate"], 0.4);
        assert_eq!(v["flavour"]["id"], "cheese-onion");
        assert_eq!(v["flavour"]["zone"]["x"], 0.5);
        assert_eq!(v["waveform"].as_array().map(Vec::len), Some(3));
        Ok(())
    }
}
