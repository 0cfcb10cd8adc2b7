use fnv::FnvHashSet;

/// Hierarchy levels of the timeline, coarse to fine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Eon,
    Period,
    Event,
}

/// One node of the three-level timeline tree.
///
/// The dataset is built once at startup and never mutated; navigation only
/// changes which subtree is presented. `position` is the world-space X
/// coordinate of the marker on the timeline axis.
#[derive(Clone, Debug)]
pub struct TimelineItem {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub position: f32,
    pub color: [f32; 3],
    pub children: Vec<TimelineItem>,
}

fn event(id: &'static str, name: &'static str, position: f32, color: [f32; 3]) -> TimelineItem {
    TimelineItem {
        id,
        name,
        kind: ItemKind::Event,
        position,
        color,
        children: Vec::new(),
    }
}

fn period(
    id: &'static str,
    name: &'static str,
    position: f32,
    color: [f32; 3],
    children: Vec<TimelineItem>,
) -> TimelineItem {
    TimelineItem {
        id,
        name,
        kind: ItemKind::Period,
        position,
        color,
        children,
    }
}

fn eon(
    id: &'static str,
    name: &'static str,
    position: f32,
    color: [f32; 3],
    children: Vec<TimelineItem>,
) -> TimelineItem {
    TimelineItem {
        id,
        name,
        kind: ItemKind::Eon,
        position,
        color,
        children,
    }
}

/// The built-in deep-time dataset: four eons spanning x in [-75, 75],
/// drilled down to periods and notable events. Positions increase left to
/// right in chronological order; spacing is intentionally uneven.
pub fn timeline_data() -> Vec<TimelineItem> {
    let hadean = [0.85, 0.33, 0.25];
    let archean = [0.90, 0.60, 0.20];
    let proterozoic = [0.30, 0.70, 0.45];
    let phanerozoic = [0.30, 0.50, 0.90];

    vec![
        eon(
            "hadean",
            "Hadean",
            -75.0,
            hadean,
            vec![
                period(
                    "cryptic",
                    "Cryptic",
                    -80.0,
                    [0.92, 0.42, 0.30],
                    vec![
                        event("theia-impact", "Theia Impact", -82.0, [0.95, 0.50, 0.35]),
                        event("moon-forms", "Moon Forms", -79.0, [0.95, 0.55, 0.40]),
                    ],
                ),
                period(
                    "basin-groups",
                    "Basin Groups",
                    -70.0,
                    [0.88, 0.38, 0.28],
                    vec![
                        event("first-oceans", "First Oceans", -72.0, [0.90, 0.48, 0.33]),
                        event("oldest-zircons", "Oldest Zircons", -68.0, [0.90, 0.52, 0.38]),
                    ],
                ),
            ],
        ),
        eon(
            "archean",
            "Archean",
            -35.0,
            archean,
            vec![
                period(
                    "eoarchean",
                    "Eoarchean",
                    -45.0,
                    [0.93, 0.66, 0.26],
                    vec![
                        event("earliest-life", "Earliest Life", -47.0, [0.95, 0.72, 0.32]),
                        event(
                            "isua-rocks",
                            "Isua Supracrustals",
                            -43.0,
                            [0.95, 0.75, 0.38],
                        ),
                    ],
                ),
                period(
                    "paleoarchean",
                    "Paleoarchean",
                    -35.0,
                    [0.91, 0.62, 0.24],
                    vec![
                        event(
                            "stromatolites",
                            "First Stromatolites",
                            -36.0,
                            [0.93, 0.70, 0.30],
                        ),
                        event("vaalbara", "Vaalbara Supercontinent", -33.0, [0.93, 0.73, 0.36]),
                    ],
                ),
                period(
                    "neoarchean",
                    "Neoarchean",
                    -25.0,
                    [0.89, 0.58, 0.22],
                    vec![
                        event(
                            "oxygenic-photosynthesis",
                            "Oxygenic Photosynthesis",
                            -26.0,
                            [0.91, 0.68, 0.28],
                        ),
                        event("kenorland", "Kenorland Assembles", -23.0, [0.91, 0.71, 0.34]),
                    ],
                ),
            ],
        ),
        eon(
            "proterozoic",
            "Proterozoic",
            5.0,
            proterozoic,
            vec![
                period(
                    "paleoproterozoic",
                    "Paleoproterozoic",
                    -5.0,
                    [0.34, 0.76, 0.50],
                    vec![
                        event(
                            "great-oxidation",
                            "Great Oxidation Event",
                            -7.0,
                            [0.40, 0.80, 0.56],
                        ),
                        event(
                            "huronian-glaciation",
                            "Huronian Glaciation",
                            -3.0,
                            [0.44, 0.82, 0.62],
                        ),
                    ],
                ),
                period(
                    "mesoproterozoic",
                    "Mesoproterozoic",
                    5.0,
                    [0.32, 0.72, 0.47],
                    vec![
                        event(
                            "first-eukaryotes",
                            "First Eukaryotes",
                            3.0,
                            [0.38, 0.78, 0.53],
                        ),
                        event("grenville", "Grenville Orogeny", 7.0, [0.42, 0.80, 0.59]),
                    ],
                ),
                period(
                    "neoproterozoic",
                    "Neoproterozoic",
                    15.0,
                    [0.30, 0.68, 0.44],
                    vec![
                        event("snowball-earth", "Snowball Earth", 13.0, [0.36, 0.75, 0.50]),
                        event("ediacaran-biota", "Ediacaran Biota", 17.0, [0.40, 0.78, 0.56]),
                    ],
                ),
            ],
        ),
        eon(
            "phanerozoic",
            "Phanerozoic",
            50.0,
            phanerozoic,
            vec![
                period(
                    "paleozoic",
                    "Paleozoic",
                    40.0,
                    [0.36, 0.56, 0.93],
                    vec![
                        event(
                            "cambrian-explosion",
                            "Cambrian Explosion",
                            37.0,
                            [0.42, 0.62, 0.95],
                        ),
                        event(
                            "permian-extinction",
                            "Permian Extinction",
                            43.0,
                            [0.46, 0.65, 0.95],
                        ),
                    ],
                ),
                period(
                    "mesozoic",
                    "Mesozoic",
                    55.0,
                    [0.34, 0.53, 0.91],
                    vec![
                        event("dinosaurs", "Age of Dinosaurs", 52.0, [0.40, 0.60, 0.93]),
                        event("chicxulub", "Chicxulub Impact", 58.0, [0.44, 0.63, 0.93]),
                    ],
                ),
                period(
                    "cenozoic",
                    "Cenozoic",
                    70.0,
                    [0.32, 0.50, 0.89],
                    vec![
                        event(
                            "mammal-radiation",
                            "Mammal Radiation",
                            67.0,
                            [0.38, 0.58, 0.91],
                        ),
                        event(
                            "quaternary-ice-age",
                            "Quaternary Ice Ages",
                            73.0,
                            [0.42, 0.61, 0.91],
                        ),
                    ],
                ),
            ],
        ),
    ]
}

/// Check the static dataset once at startup: depth exactly three and ids
/// globally unique (navigation resolves the active path by id). Returns the
/// duplicate id if one exists so the caller can log it; lookups themselves
/// stay lenient.
pub fn validate(data: &[TimelineItem]) -> Result<(), &'static str> {
    let mut seen = FnvHashSet::default();
    for eon in data {
        if !seen.insert(eon.id) {
            return Err(eon.id);
        }
        if eon.children.is_empty() {
            return Err(eon.id);
        }
        for period in &eon.children {
            if !seen.insert(period.id) {
                return Err(period.id);
            }
            if period.children.is_empty() {
                return Err(period.id);
            }
            for ev in &period.children {
                if !seen.insert(ev.id) {
                    return Err(ev.id);
                }
                if !ev.children.is_empty() {
                    return Err(ev.id);
                }
            }
        }
    }
    Ok(())
}
