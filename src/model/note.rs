pub use rosu_map::section::hit_objects::hit_samples::HitSoundType;

/// A single note of a beatmap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    pub start_time: f64,
    pub kind: NoteKind,
}

impl Note {
    pub const fn new(start_time: f64, kind: NoteKind) -> Self {
        Self { start_time, kind }
    }

    pub const fn hit(start_time: f64, hit_type: HitType) -> Self {
        Self::new(start_time, NoteKind::Hit(hit_type))
    }

    /// Whether the note is a hit i.e. neither a drum roll nor a swell.
    pub const fn is_hit(&self) -> bool {
        matches!(self.kind, NoteKind::Hit(_))
    }

    /// The [`HitType`] of hits, `None` for drum rolls and swells.
    pub const fn hit_type(&self) -> Option<HitType> {
        match self.kind {
            NoteKind::Hit(hit_type) => Some(hit_type),
            NoteKind::DrumRoll | NoteKind::Swell => None,
        }
    }
}

/// The different kinds of notes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoteKind {
    Hit(HitType),
    DrumRoll,
    Swell,
}

/// The color of a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitType {
    Center,
    Rim,
}

impl HitType {
    pub const fn is_rim(self) -> bool {
        matches!(self, Self::Rim)
    }
}

impl From<HitSoundType> for HitType {
    fn from(sound: HitSoundType) -> Self {
        if sound.has_flag(HitSoundType::CLAP | HitSoundType::WHISTLE) {
            Self::Rim
        } else {
            Self::Center
        }
    }
}
