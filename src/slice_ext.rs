use crate::{Compare, InsertionSorter, Natural, Sorter};

/// Insertion sort as methods on slices and vectors.
pub trait InsertionSortExt<T> {
    fn insertion_sort(&mut self)
    where
        T: Ord;

    fn insertion_sort_by<C: Compare<T>>(&mut self, compare: C);

    /// Returns a sorted copy and leaves `self` as it was.
    fn insertion_sorted(&self) -> Vec<T>
    where
        T: Ord + Clone;

    fn insertion_sorted_by<C: Compare<T>>(&self, compare: C) -> Vec<T>
    where
        T: Clone;
}

impl<T> InsertionSortExt<T> for [T] {
    fn insertion_sort(&mut self)
    where
        T: Ord,
    {
        self.insertion_sort_by(Natural);
    }

    fn insertion_sort_by<C: Compare<T>>(&mut self, compare: C) {
        InsertionSorter.sort_by(self, compare);
    }

    fn insertion_sorted(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        self.insertion_sorted_by(Natural)
    }

    fn insertion_sorted_by<C: Compare<T>>(&self, compare: C) -> Vec<T>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        copy.insertion_sort_by(compare);
        copy
    }
}

#[cfg(test)]
mod tests {
    use crate::{InsertionSortExt, Natural, Reversed};

    fn students() -> Vec<&'static str> {
        vec!["Darcy", "Elad", "Firdous", "Amy", "Bala", "Che"]
    }

    #[test]
    fn sorts_vec_in_place() {
        let mut v = students();
        v.insertion_sort();
        assert_eq!(v, ["Amy", "Bala", "Che", "Darcy", "Elad", "Firdous"]);
        v.insertion_sort_by(Reversed(Natural));
        assert_eq!(v, ["Firdous", "Elad", "Darcy", "Che", "Bala", "Amy"]);
    }

    #[test]
    fn sorted_copy_leaves_source_alone() {
        let v = students();
        let ascending = v.insertion_sorted();
        let descending = v.insertion_sorted_by(|a: &&str, b: &&str| b.cmp(a));
        assert_eq!(ascending, ["Amy", "Bala", "Che", "Darcy", "Elad", "Firdous"]);
        assert_eq!(descending, ["Firdous", "Elad", "Darcy", "Che", "Bala", "Amy"]);
        assert_eq!(v, students());
    }

    #[test]
    fn sub_slice() {
        let mut v = [5, 4, 3, 2, 1];
        v[1..4].insertion_sort();
        assert_eq!(v, [5, 2, 3, 4, 1]);
    }
}
