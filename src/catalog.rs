use crate::body::PartKind;
use crate::render::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter},
};

const STEEL_DARK: Color = Color::rgb(0x24, 0x33, 0x44);
const STEEL: Color = Color::rgb(0x3c, 0x55, 0x70);
const STEEL_LIGHT: Color = Color::rgb(0x5c, 0x7e, 0xa0);
const TEAL: Color = Color::rgb(0x2f, 0x9e, 0x95);
const TEAL_LIGHT: Color = Color::rgb(0x45, 0xbf, 0xb5);
const BRASS: Color = Color::rgb(0xc2, 0x9f, 0x4a);
const BRASS_LIGHT: Color = Color::rgb(0xd6, 0xba, 0x6e);
const ZINC: Color = Color::rgb(0xd9, 0xdd, 0xe2);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub kind: PartKind,
    pub label: String,
    pub size: Vec2,
    pub fill: Color,
    pub edge: Color,
}

fn part(kind: PartKind, label: &str, w: f32, h: f32, fill: Color, edge: Color) -> PartSpec {
    PartSpec {
        kind,
        label: label.to_string(),
        size: Vec2::new(w, h),
        fill,
        edge,
    }
}

// the spawn loop cycles this list in order
pub fn default_catalog() -> Vec<PartSpec> {
    use PartKind::*;
    vec![
        part(Disc, "D-50", 50.0, 50.0, TEAL, STEEL_DARK),
        part(Disc, "D-58", 58.0, 58.0, TEAL, STEEL_DARK),
        part(Disc, "D-64", 64.0, 64.0, TEAL_LIGHT, STEEL),
        part(Disc, "D-72", 72.0, 72.0, TEAL_LIGHT, STEEL),
        part(Bar, "AX-24", 24.0, 100.0, STEEL_DARK, STEEL),
        part(Bar, "AX-28", 28.0, 110.0, STEEL_DARK, STEEL),
        part(Bar, "AX-32", 32.0, 95.0, STEEL, STEEL_DARK),
        part(Bar, "AX-36", 36.0, 90.0, STEEL, STEEL_DARK),
        part(Bracket, "LB-55", 55.0, 40.0, BRASS, STEEL_DARK),
        part(Bracket, "LB-60", 60.0, 38.0, BRASS, STEEL_DARK),
        part(Plate, "CP-50", 50.0, 20.0, BRASS_LIGHT, STEEL_DARK),
        part(Bolt, "HX-32", 32.0, 32.0, ZINC, STEEL_DARK),
        part(Disc, "D-44", 44.0, 44.0, TEAL, STEEL_DARK),
        part(Bar, "AX-18", 18.0, 80.0, STEEL_LIGHT, STEEL_DARK),
        part(Bar, "EX-120", 22.0, 120.0, STEEL_DARK, TEAL),
        part(Bar, "EX-140", 22.0, 140.0, STEEL, TEAL),
        part(Disc, "D-38", 38.0, 38.0, TEAL_LIGHT, STEEL),
        part(Bracket, "LB-48", 48.0, 36.0, BRASS_LIGHT, STEEL_DARK),
    ]
}

pub fn load_catalog(path: &str) -> Result<Vec<PartSpec>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let catalog = serde_json::from_reader(reader)?;

    Ok(catalog)
}

pub fn save_catalog(path: &str, catalog: &[PartSpec]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, catalog)?;

    Ok(())
}
