use wakeline::race::BoatColor;
use wakeline::scene::BoatTrace;

use super::map::marker_label;

fn trace(id: &str, name: &str) -> BoatTrace {
    BoatTrace {
        id: id.to_owned(),
        name: name.to_owned(),
        class: "J80".to_owned(),
        section: "A".to_owned(),
        color: BoatColor::FALLBACK,
        runs: Vec::new(),
        marker: None,
        marker_visible: false,
    }
}

#[test]
fn marker_label_prefers_boat_name() -> Result<(), String> {
    let label = marker_label(&trace("11", "Aurora")).to_owned();
    if label != "Aurora" {
        return Err(format!("Expected the boat name, got '{label}'"));
    }
    Ok(())
}

#[test]
fn marker_label_falls_back_to_id() -> Result<(), String> {
    for name in ["", "Spirit of the Western Approaches"] {
        let label = marker_label(&trace("SUI 42", name)).to_owned();
        if label != "SUI 42" {
            return Err(format!("Expected the sail id for '{name}', got '{label}'"));
        }
    }
    Ok(())
}
