use olc_rs::{decode, encode, recover_nearest, shorten, OlcError, CODE_PRECISION_NORMAL};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct Place {
    name: String,
    lat: f64,
    lng: f64,
}

fn main() -> Result<(), OlcError> {
    let json_data = r#"[
        {"name": "Zurich Hauptbahnhof", "lat": 47.378177, "lng": 8.540192},
        {"name": "Grossmuenster", "lat": 47.370139, "lng": 8.544087},
        {"name": "Lindenhof", "lat": 47.373056, "lng": 8.540833},
        {"name": "Uetliberg", "lat": 47.349899, "lng": 8.491206}
    ]"#;

    let places: Vec<Place> = serde_json::from_str(json_data).expect("valid JSON");
    println!("Encoding {} places\n", places.len());

    let mut codes: HashMap<String, String> = HashMap::new();
    for place in &places {
        let code = encode(&(place.lat, place.lng), CODE_PRECISION_NORMAL)?;
        codes.insert(place.name.clone(), code);
    }

    // Shorten every code relative to the first place and recover it back.
    let reference = (places[0].lat, places[0].lng);
    for place in &places {
        let code = &codes[&place.name];
        let area = decode(code)?;
        let short = shorten(code, &reference)?;
        let recovered = recover_nearest(&short, &reference)?;

        println!(
            "{:<22} {}  ({:.6}, {:.6})  short: {:<9} recovered: {}",
            place.name,
            code,
            area.lat_center(),
            area.lng_center(),
            short,
            recovered
        );
        assert_eq!(&recovered, code);
    }

    Ok(())
}
