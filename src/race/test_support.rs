use crate::error::AppResult;

use super::types::{Position, Race};
use super::xml::{parse_race_file, parse_roster};

pub(crate) const ROSTER_XML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<boats>
  <boat id="1" name="Aurora" color="#ff0000" section="A" class="J80" rating="1.0" flag="SUI"/>
  <boat id="2" name="Borea" color="#00ff00" section="A" class="Surprise"/>
  <boat id="3" name="Cirrus" color="#0000ff" section="B" class="J80"/>
  <boat id="4" name="Dune" color="nope" section="B" class="Esse"/>
  <boat id="9" name="Ghost" color="#123456" class="J80"/>
</boats>
"##;

pub(crate) const RACE_XML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<races>
  <race date="2016-06-12" course="Coastal" rclat="46.40" rclon="6.60">
    <course loop="true" ratio="1.45">
      <m id="M1" lat="46.41" lon="6.61"/>
      <m id="M2" lat="46.45" lon="6.70"/>
      <m id="bad" lat="north" lon="6.70"/>
    </course>
    <section id="A" start="10:00">
      <boat id="1">
        <p t="100" l="46.40" o="6.60"/>
        <p t="110" l="46.41" o="6.62"/>
        <p t="120" l="46.42" o="6.64"/>
        <p t="130" l="46.43" o="6.66"/>
      </boat>
      <boat id="2">
        <p t="130" l="46.44" o="6.65"/>
        <p t="100" l="46.40" o="6.61"/>
        <p t="115" l="" o="6.63"/>
      </boat>
      <boat id="7">
        <p t="100" l="46.40" o="6.60"/>
      </boat>
    </section>
    <section id="B">
      <boat id="3">
        <p t="105" l="46.41" o="6.63"/>
        <p t="125" l="46.42" o="6.68"/>
      </boat>
      <boat id="4">
        <p t="140" l="46.45" o="6.69"/>
      </boat>
    </section>
  </race>
</races>
"##;

pub(crate) fn sample_race() -> AppResult<Race> {
    let roster = parse_roster(ROSTER_XML)?;
    let file = parse_race_file(RACE_XML)?;
    Ok(Race::assemble(&roster, file)?)
}

pub(crate) fn straight_track(len: usize) -> Vec<Position> {
    (0..len)
        .map(|index| {
            let step = index as f64;
            Position::new(step, step * 0.001, step * 0.001)
        })
        .collect()
}

pub(crate) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
