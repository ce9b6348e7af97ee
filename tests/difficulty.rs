use rosu_mods::GameModsLegacy;
use taiko_pattern::{
    model::note::{HitType, Note, NoteKind},
    taiko::{TaikoDifficultyAttributes, TaikoDifficultyConfig, TaikoStrains},
    Beatmap, Difficulty, DifficultyError,
};

macro_rules! test_cases {
    ( $map:ident {
        $( $( $mods:ident )+ => {
            $( $key:ident: $value:expr $( , )? )*
        } ;)*
    } ) => {
        $(
            let mods = GameModsLegacy::NoMod $( | GameModsLegacy::$mods )+;
            let attrs = Difficulty::new().mods(mods).calculate(&$map).unwrap();
            let expected = TaikoDifficultyAttributes {
                $( $key: $value, )*
                ..attrs.clone()
            };
            run(&attrs, &expected, mods);
        )*
    };
}

const EPSILON: f64 = 1e-9;

fn run(actual: &TaikoDifficultyAttributes, expected: &TaikoDifficultyAttributes, mods: GameModsLegacy) {
    let TaikoDifficultyAttributes {
        stars,
        pattern,
        rhythm,
        stamina,
        peak,
        great_hit_window,
        ok_hit_window,
        max_combo,
        n_objects,
        mods: _,
    } = expected;

    let close = |name: &str, actual: f64, expected: f64| {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{name}: {actual} != {expected} [mods={mods:?}]"
        );
    };

    close("stars", actual.stars, *stars);
    close("pattern", actual.pattern, *pattern);
    close("rhythm", actual.rhythm, *rhythm);
    close("stamina", actual.stamina, *stamina);
    close("peak", actual.peak, *peak);
    close("great_hit_window", actual.great_hit_window, *great_hit_window);
    close("ok_hit_window", actual.ok_hit_window, *ok_hit_window);
    assert_eq!(actual.max_combo, *max_combo, "max_combo [mods={mods:?}]");
    assert_eq!(actual.n_objects, *n_objects, "n_objects [mods={mods:?}]");
}

/// A stream of `len` hits with a rim on every third note and a short break
/// after every eighth note.
fn stream(len: u32, spacing: f64) -> Beatmap {
    let hits = (0..len).map(|i| {
        let hit_type = if i % 3 == 0 { HitType::Rim } else { HitType::Center };
        let breaks = f64::from(i / 8);

        (f64::from(i) * spacing + breaks * spacing, hit_type)
    });

    Beatmap::from_hits(hits)
}

#[test]
fn basic_stream() {
    let map = stream(64, 150.0);

    test_cases! {
        map {
            NoMod => {
                stars: 3.7740197581359483,
                pattern: 1.7083070364268689,
                rhythm: 0.2652186802739971,
                stamina: 2.5618339935572227,
                peak: 3.4877848024844327,
                great_hit_window: 35.0,
                ok_hit_window: 80.0,
                max_combo: 64,
                n_objects: 64,
            };
            DoubleTime => {
                stars: 4.825721391814598,
                pattern: 2.332752233335736,
                rhythm: 0.26267358238466426,
                stamina: 3.4401200165617634,
                peak: 4.7065622002724625,
                great_hit_window: 35.0 / 1.5,
                ok_hit_window: 80.0 / 1.5,
                max_combo: 64,
                n_objects: 64,
            };
            HalfTime => {
                stars: 3.1135949815005843,
                pattern: 1.3527141510859697,
                rhythm: 0.27404899731279747,
                stamina: 2.032214568461624,
                peak: 2.7829323967619786,
                great_hit_window: 35.0 / 0.75,
                ok_hit_window: 80.0 / 0.75,
                max_combo: 64,
                n_objects: 64,
            };
            HardRock => {
                stars: 3.850068364101731,
                pattern: 1.8243703533321718,
                rhythm: 0.26007610207280907,
                stamina: 2.566880257969996,
                peak: 3.5718521791560893,
                great_hit_window: 29.0,
                ok_hit_window: 68.0,
                max_combo: 64,
                n_objects: 64,
            };
            Easy => {
                stars: 3.676274856201808,
                pattern: 1.5527158667211813,
                rhythm: 0.25976070744294877,
                stamina: 2.562761707128884,
                peak: 3.380629741234921,
                great_hit_window: 42.5,
                ok_hit_window: 100.0,
                max_combo: 64,
                n_objects: 64,
            };
        }
    };
}

#[test]
fn empty_map() {
    let map = Beatmap::new(Vec::new());
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(attrs.stars, 0.0);
    assert_eq!(attrs.peak, 0.0);
    assert_eq!(attrs.max_combo, 0);
    assert_eq!(attrs.n_objects, 0);
    assert!((attrs.great_hit_window - 35.0).abs() < EPSILON);

    let strains = Difficulty::new().strains(&map).unwrap();
    assert_eq!(strains, TaikoStrains::default());
}

#[test]
fn single_hit_is_rated() {
    let map = Beatmap::from_hits([(1000.0, HitType::Center)]);
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(attrs.max_combo, 1);
    assert!(attrs.stars.is_finite());
    assert!(attrs.stars >= 0.0);
}

#[test]
fn clock_rate_affects_rating() {
    let map = stream(256, 150.0);

    let nomod = Difficulty::new().calculate(&map).unwrap();
    let dt = Difficulty::new()
        .mods(GameModsLegacy::DoubleTime)
        .calculate(&map)
        .unwrap();
    let ht = Difficulty::new()
        .mods(GameModsLegacy::HalfTime)
        .calculate(&map)
        .unwrap();

    assert!(dt.stars > nomod.stars, "{} <= {}", dt.stars, nomod.stars);
    assert!(ht.stars < nomod.stars, "{} >= {}", ht.stars, nomod.stars);

    let custom = Difficulty::new()
        .mods(GameModsLegacy::DoubleTime)
        .clock_rate(1.0)
        .calculate(&map)
        .unwrap();

    assert!((custom.stars - nomod.stars).abs() < EPSILON);
}

#[test]
fn components_and_rescale() {
    let attrs = Difficulty::new().calculate(&stream(128, 120.0)).unwrap();

    assert!(attrs.pattern > 0.0);
    assert!(attrs.rhythm >= 0.0);
    assert!(attrs.stamina > 0.0);
    assert!(attrs.peak >= attrs.pattern);
    assert!(attrs.peak >= attrs.stamina);
    assert!((attrs.stars - 10.43 * (attrs.peak / 8.0 + 1.0).ln()).abs() < EPSILON);
}

#[test]
fn passed_objects_match_truncated_map() {
    let map = stream(96, 130.0);

    let partial = Difficulty::new()
        .passed_objects(40)
        .calculate(&map)
        .unwrap();

    let truncated = Beatmap::new(map.notes[..40].to_vec());
    let full = Difficulty::new().calculate(&truncated).unwrap();

    assert_eq!(partial, full);
    assert_eq!(partial.max_combo, 40);
}

#[test]
fn drum_rolls_and_swells_are_skipped() {
    let map = stream(48, 150.0);

    let mut notes = map.notes.clone();
    notes.insert(10, Note::new(notes[9].start_time, NoteKind::DrumRoll));
    notes.push(Note::new(100_000.0, NoteKind::Swell));

    let with_extras = Beatmap::new(notes);

    let expected = Difficulty::new().calculate(&map).unwrap();
    let actual = Difficulty::new().calculate(&with_extras).unwrap();

    assert_eq!(actual, expected);
}

#[test]
fn od_override() {
    let map = stream(16, 200.0).od(2.0);

    let from_map = Difficulty::new().calculate(&map).unwrap();
    assert!((from_map.great_hit_window - 44.0).abs() < EPSILON);

    let as_is = Difficulty::new()
        .mods(GameModsLegacy::HardRock)
        .od(10.0, true)
        .calculate(&map)
        .unwrap();
    assert!((as_is.great_hit_window - 20.0).abs() < EPSILON);

    let with_mods = Difficulty::new()
        .mods(GameModsLegacy::Easy)
        .od(10.0, false)
        .calculate(&map)
        .unwrap();
    assert!((with_mods.great_hit_window - 35.0).abs() < EPSILON);
}

#[test]
fn config_multipliers() {
    let map = stream(64, 150.0);

    let default = Difficulty::new().calculate(&map).unwrap();

    let config = TaikoDifficultyConfig {
        pattern_multiplier: 0.0,
        ..Default::default()
    };
    let without_pattern = Difficulty::new().config(config).calculate(&map).unwrap();

    assert_eq!(without_pattern.pattern, 0.0);
    assert!(without_pattern.stars < default.stars);
}

#[test]
fn strains_per_section() {
    let map = stream(32, 150.0);
    let strains = Difficulty::new().strains(&map).unwrap();

    let last = map.notes.last().unwrap().start_time;
    let sections = (last / TaikoStrains::SECTION_LEN).ceil() as usize + 1;

    assert_eq!(strains.pattern.len(), sections);
    assert_eq!(strains.rhythm.len(), sections);
    assert_eq!(strains.stamina.len(), sections);
    assert!(strains.stamina.iter().all(|&strain| strain >= 0.0));
}

#[test]
fn invalid_input() {
    let unsorted = Beatmap::from_hits([(200.0, HitType::Center), (100.0, HitType::Rim)]);

    assert!(matches!(
        Difficulty::new().calculate(&unsorted),
        Err(DifficultyError::UnsortedNotes { idx: 1, .. })
    ));

    let non_finite = Beatmap::from_hits([(f64::INFINITY, HitType::Center)]);

    assert_eq!(
        Difficulty::new().calculate(&non_finite),
        Err(DifficultyError::NonFiniteTime { idx: 0 })
    );

    let map = stream(8, 150.0);

    assert!(matches!(
        Difficulty::new().clock_rate(f64::NAN).calculate(&map),
        Err(DifficultyError::ClockRate(rate)) if rate.is_nan()
    ));

    assert!(matches!(
        Difficulty::new().od(20.0, true).strains(&map),
        Err(DifficultyError::HitWindow(_))
    ));
}
