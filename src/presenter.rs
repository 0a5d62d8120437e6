use crate::{City, HandAngles};

/// Whatever paints the clocks. One display unit per shown city.
pub trait Presenter {
    fn mount(&mut self, city: &'static City);

    fn unmount(&mut self, city_id: &str);

    fn render(&mut self, city_id: &str, angles: HandAngles, digital: &str);

    /// Cities that may be added, and whether adding is currently allowed.
    fn offer(&mut self, _available: &[&'static City], _can_add: bool) {}
}
