/// Shared behavior of all skills that process difficulty objects one after
/// another and keep track of their strain peaks.
///
/// Implemented through the `define_skill!` macro.
pub trait StrainSkill: Sized {
    type DifficultyObject;
    type DifficultyObjects: ?Sized;

    const DECAY_WEIGHT: f64 = 0.9;
    const SECTION_LENGTH: f64 = 400.0;

    /// Processes the next difficulty object.
    ///
    /// Objects must be processed in order of their start time.
    fn process(&mut self, curr: &Self::DifficultyObject, objects: &Self::DifficultyObjects);

    /// The strain of every processed object.
    fn object_strains(&self) -> &[f64];

    /// All section peaks, including the currently open section.
    fn current_strain_peaks(&self) -> Vec<f64>;

    /// All section peaks, including the currently open section.
    fn into_current_strain_peaks(self) -> Vec<f64>;

    fn difficulty_value(current_strain_peaks: Vec<f64>) -> f64 {
        difficulty_value(current_strain_peaks, Self::DECAY_WEIGHT)
    }

    fn into_difficulty_value(self) -> f64 {
        Self::difficulty_value(self.into_current_strain_peaks())
    }

    fn cloned_difficulty_value(&self) -> f64 {
        Self::difficulty_value(self.current_strain_peaks())
    }
}

/// Sums up the given peaks from hardest to easiest, each one weighted by
/// `decay_weight` to the power of its rank.
pub fn difficulty_value(mut peaks: Vec<f64>, decay_weight: f64) -> f64 {
    // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort.
    // * These sections will not contribute to the difficulty.
    peaks.retain(|&peak| peak > 0.0);
    peaks.sort_by(|a, b| b.total_cmp(a));

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    for strain in peaks {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

/// Defines a skill struct and implements [`StrainSkill`] for it.
///
/// Fields with a default value are initialized with it, all other fields
/// become arguments of the generated `new` function in order of definition.
/// Every field definition, including the last one, must end with a comma.
///
/// - `StrainSkill`: the skill must provide the methods
///   `strain_value_at(&mut self, curr, objects) -> f64` and
///   `calculate_initial_strain(&mut self, time, curr, objects) -> f64`.
/// - `StrainDecaySkill`: the skill must provide the constants
///   `SKILL_MULTIPLIER` and `STRAIN_DECAY_BASE` as well as the method
///   `strain_value_of(&self, curr, objects) -> f64`. The strain decays
///   exponentially between objects.
///
/// ```ignore
/// define_skill! {
///     #[derive(Clone, Debug)]
///     pub struct Example: StrainDecaySkill => Objects[Object] {
///         great_hit_window: f64,
///         counter: usize = 0,
///     }
/// }
/// ```
macro_rules! define_skill {
    // Field with a default value
    (
        @fields $header:tt
        [$( $field:tt )*] [$( $param:tt )*] [$( $init:tt )*]
        $field_vis:vis $field_name:ident: $field_ty:ty = $default:expr,
        $( $rest:tt )*
    ) => {
        define_skill! {
            @fields $header
            [$( $field )* $field_vis $field_name: $field_ty,]
            [$( $param )*]
            [$( $init )* $field_name: $default,]
            $( $rest )*
        }
    };
    // Field that needs to be passed to the constructor
    (
        @fields $header:tt
        [$( $field:tt )*] [$( $param:tt )*] [$( $init:tt )*]
        $field_vis:vis $field_name:ident: $field_ty:ty,
        $( $rest:tt )*
    ) => {
        define_skill! {
            @fields $header
            [$( $field )* $field_vis $field_name: $field_ty,]
            [$( $param )* $field_name: $field_ty,]
            [$( $init )* $field_name,]
            $( $rest )*
        }
    };
    // All fields collected
    (
        @fields [
            $( #[$( $meta:tt )*] )*
            $name:ident $kind:ident [$objects:ty] [$object:ty]
        ]
        [$( $field:tt )*] [$( $param:tt )*] [$( $init:tt )*]
    ) => {
        $( #[$( $meta )*] )*
        pub struct $name {
            $( $field )*
            strain_skill_curr_section_peak: f64,
            strain_skill_curr_section_end: f64,
            strain_skill_strain_peaks: Vec<f64>,
            strain_skill_object_strains: Vec<f64>,
        }

        impl $name {
            pub fn new($( $param )*) -> Self {
                Self {
                    $( $init )*
                    strain_skill_curr_section_peak: 0.0,
                    strain_skill_curr_section_end: 0.0,
                    strain_skill_strain_peaks: Vec::new(),
                    strain_skill_object_strains: Vec::new(),
                }
            }
        }

        impl $crate::any::difficulty::skills::StrainSkill for $name {
            type DifficultyObject = $object;
            type DifficultyObjects = $objects;

            fn process(&mut self, curr: &$object, objects: &$objects) {
                use $crate::any::difficulty::object::{HasStartTime, IDifficultyObject};

                // * The first object doesn't generate a strain, so we begin with an incremented section end
                if curr.idx() == 0 {
                    self.strain_skill_curr_section_end =
                        f64::ceil(curr.start_time() / Self::SECTION_LENGTH) * Self::SECTION_LENGTH;
                }

                while curr.start_time() > self.strain_skill_curr_section_end {
                    self.strain_skill_strain_peaks.push(self.strain_skill_curr_section_peak);

                    // * The maximum strain of the new section is not zero by default
                    // * This means we need to capture the strain level at the beginning of the new section, and use that as the initial peak level.
                    let time = self.strain_skill_curr_section_end;
                    self.strain_skill_curr_section_peak =
                        self.calculate_initial_strain(time, curr, objects);
                    self.strain_skill_curr_section_end += Self::SECTION_LENGTH;
                }

                let strain = self.strain_value_at(curr, objects);
                self.strain_skill_curr_section_peak =
                    f64::max(strain, self.strain_skill_curr_section_peak);
                self.strain_skill_object_strains.push(strain);
            }

            fn object_strains(&self) -> &[f64] {
                &self.strain_skill_object_strains
            }

            fn current_strain_peaks(&self) -> Vec<f64> {
                let mut peaks = Vec::with_capacity(self.strain_skill_strain_peaks.len() + 1);
                peaks.extend_from_slice(&self.strain_skill_strain_peaks);
                peaks.push(self.strain_skill_curr_section_peak);

                peaks
            }

            fn into_current_strain_peaks(self) -> Vec<f64> {
                let mut peaks = self.strain_skill_strain_peaks;
                peaks.push(self.strain_skill_curr_section_peak);

                peaks
            }
        }

        define_skill!(@kind $kind $name [$objects] [$object]);
    };
    (@kind StrainSkill $name:ident [$objects:ty] [$object:ty]) => {};
    (@kind StrainDecaySkill $name:ident [$objects:ty] [$object:ty]) => {
        impl $name {
            fn strain_value_at(&mut self, curr: &$object, objects: &$objects) -> f64 {
                self.strain_decay_skill_current_strain *= $crate::any::difficulty::skills::strain_decay(
                    curr.delta_time,
                    Self::STRAIN_DECAY_BASE,
                );
                self.strain_decay_skill_current_strain +=
                    self.strain_value_of(curr, objects) * Self::SKILL_MULTIPLIER;

                self.strain_decay_skill_current_strain
            }

            fn calculate_initial_strain(
                &mut self,
                time: f64,
                curr: &$object,
                objects: &$objects,
            ) -> f64 {
                use $crate::any::difficulty::object::{HasStartTime, IDifficultyObject};

                let prev_start_time = curr
                    .previous(0, objects)
                    .map_or(0.0, HasStartTime::start_time);

                self.strain_decay_skill_current_strain
                    * $crate::any::difficulty::skills::strain_decay(
                        time - prev_start_time,
                        Self::STRAIN_DECAY_BASE,
                    )
            }
        }
    };
    // Entry points
    (
        $( #[$( $meta:tt )*] )*
        pub struct $name:ident: StrainDecaySkill => $objects:ty[$object:ty] {
            $( $body:tt )*
        }
    ) => {
        define_skill! {
            @fields [$( #[$( $meta )*] )* $name StrainDecaySkill [$objects] [$object]]
            [] [] []
            $( $body )*
            strain_decay_skill_current_strain: f64 = 0.0,
        }
    };
    (
        $( #[$( $meta:tt )*] )*
        pub struct $name:ident: StrainSkill => $objects:ty[$object:ty] {
            $( $body:tt )*
        }
    ) => {
        define_skill! {
            @fields [$( #[$( $meta )*] )* $name StrainSkill [$objects] [$object]]
            [] [] []
            $( $body )*
        }
    };
}
