/// Anything that can tell how many training samples it holds.
pub trait DatasetSize {
    /// Returns the amount of training samples.
    fn num_samples(&self) -> usize;
}

impl DatasetSize for usize {
    fn num_samples(&self) -> usize {
        *self
    }
}

impl<T> DatasetSize for [T] {
    fn num_samples(&self) -> usize {
        self.len()
    }
}

impl<T> DatasetSize for Vec<T> {
    fn num_samples(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::batches_per_epoch;

    #[test]
    fn slices_and_vecs() {
        let samples = vec![0u8; 12];
        assert_eq!(samples.num_samples(), 12);
        assert_eq!(samples[..5].num_samples(), 5);
        assert_eq!(7usize.num_samples(), 7);
    }

    #[test]
    fn caller_owned_storage() {
        struct Rows {
            data: Vec<f32>,
            width: usize,
        }

        impl DatasetSize for Rows {
            fn num_samples(&self) -> usize {
                self.data.len() / self.width
            }
        }

        let rows = Rows {
            data: vec![0.; 30],
            width: 3,
        };
        assert_eq!(batches_per_epoch(&rows, 4).unwrap(), 2);
    }
}
