//! Real Ahmedabad art venues for realistic test fixtures.
//!
//! These are actual geocoded locations, useful for tests that want a
//! plausible working set rather than synthetic coordinates.

use tour_planner::poi::Poi;

pub const GALLERIES: &[(&str, f64, f64)] = &[
    ("079 | Stories", 23.0353928, 72.4947591),
    ("Archer Art Gallery", 23.04166188, 72.55184877),
    ("Arthshila Ahmedabad", 23.029595, 72.5372661),
    ("Basera", 23.03008, 72.57936),
    ("Conflictorium", 23.03534, 72.58649),
    ("Darpana Academy", 23.0477, 72.57277),
    ("Hutheesing Visual Art Centre", 23.03724, 72.54969),
    ("Iram Art Gallery", 23.02874, 72.49185),
    ("Kanoria Centre for Arts", 23.0375, 72.54908),
    ("Kasturbhai Lalbhai Museum", 23.05223, 72.59307),
    ("LD Museum Director Bunglow", 23.03422, 72.55094),
    ("Mehnat Manzil: Museum of Work", 22.99835, 72.53732),
    ("Samara Art Gallery", 23.04347, 72.55721),
    ("Shreyas Foundation", 23.01436, 72.53993),
    ("Studio Sangath / Vastushilpa Sangath LLP", 23.04791, 72.52645),
];

/// The full working set as owned POIs.
pub fn galleries() -> Vec<Poi> {
    GALLERIES
        .iter()
        .map(|&(name, lat, lon)| Poi::new(name, lat, lon))
        .collect()
}

/// A small subset by gallery index, handy for selection tests.
pub fn pick(indices: &[usize]) -> Vec<Poi> {
    let all = galleries();
    indices.iter().map(|&i| all[i].clone()).collect()
}
