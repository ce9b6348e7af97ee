pub trait IDifficultyObject: Sized {
    type DifficultyObjects: IDifficultyObjects<DifficultyObject = Self> + ?Sized;

    fn idx(&self) -> usize;

    fn previous<'a>(
        &self,
        backwards_idx: usize,
        diff_objects: &'a Self::DifficultyObjects,
    ) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }

    fn next<'a>(
        &self,
        forwards_idx: usize,
        diff_objects: &'a Self::DifficultyObjects,
    ) -> Option<&'a Self> {
        diff_objects.get(self.idx() + (forwards_idx + 1))
    }
}

pub trait IDifficultyObjects {
    type DifficultyObject;

    fn get(&self, idx: usize) -> Option<&Self::DifficultyObject>;
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}
