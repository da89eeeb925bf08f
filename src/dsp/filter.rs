use crate::dsp::DigitalFilter;

/// Common trait for single-sample filters
pub trait Filter {
    /// Process a single sample through the filter
    fn process(&mut self, sample: f32) -> f32;

    /// Process a buffer of samples in-place
    fn process_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

impl Filter for DigitalFilter<f32> {
    fn process(&mut self, sample: f32) -> f32 {
        self.filter(sample)
    }
}
