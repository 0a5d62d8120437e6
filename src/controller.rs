use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::{
    face::{format_digital, hand_angles},
    ActiveSet, City, Clock, Persistence, Presenter, Result, Scheduler, Ticker,
};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// Owns the city selection and the update ticker, and drives a [`Presenter`].
pub struct WorldClocks {
    phase: Phase,
    active: ActiveSet,
    ticker: Ticker,
}

impl WorldClocks {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            phase: Phase::Uninitialized,
            active: ActiveSet::new(persistence),
            ticker: Ticker::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Load the selection, mount one clock per city and start ticking.
    ///
    /// Calling this again drops the mounted clocks and starts over from
    /// storage.
    pub fn initialize(&mut self, presenter: &mut dyn Presenter, scheduler: &mut dyn Scheduler) {
        for city in self.active.cities() {
            presenter.unmount(city.id);
        }

        self.phase = Phase::Loading;
        self.active.restore();
        for &city in self.active.cities() {
            presenter.mount(city);
        }
        self.offer(presenter);
        self.refresh(presenter);

        self.ticker.start(scheduler);
        self.phase = Phase::Ready;
        info!(cities = ?self.active.list_active(), "World clocks ready");
    }

    /// Host timer callback. Returns whether the clocks were redrawn.
    pub fn on_timer(&mut self, presenter: &mut dyn Presenter, scheduler: &mut dyn Scheduler) -> bool {
        if !self.ticker.fire(scheduler) {
            return false;
        }
        self.refresh(presenter);
        true
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    pub fn refresh(&self, presenter: &mut dyn Presenter) {
        self.refresh_at(Utc::now(), presenter);
    }

    pub fn refresh_at(&self, instant: DateTime<Utc>, presenter: &mut dyn Presenter) {
        for &city in self.active.cities() {
            render_city(city, instant, presenter);
        }
    }

    pub fn add(&mut self, id: &str, presenter: &mut dyn Presenter) -> Result<()> {
        let city = self.active.add(id)?;
        debug!(id, "Added clock");
        presenter.mount(city);
        render_city(city, Utc::now(), presenter);
        self.offer(presenter);
        Ok(())
    }

    pub fn remove(&mut self, id: &str, presenter: &mut dyn Presenter) -> Result<()> {
        let city = self.active.remove(id)?;
        debug!(id, "Removed clock");
        presenter.unmount(city.id);
        self.offer(presenter);
        Ok(())
    }

    pub fn list_active(&self) -> Vec<&'static str> {
        self.active.list_active()
    }

    pub fn list_available(&self) -> Vec<&'static City> {
        self.active.list_available()
    }

    pub fn can_add(&self) -> bool {
        self.active.can_add()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    fn offer(&self, presenter: &mut dyn Presenter) {
        presenter.offer(&self.active.list_available(), self.active.can_add());
    }
}

fn render_city(city: &City, instant: DateTime<Utc>, presenter: &mut dyn Presenter) {
    match Clock::new(city.timezone) {
        Ok(clock) => {
            let time = clock.at(instant);
            presenter.render(
                city.id,
                hand_angles(time.hours, time.minutes, time.seconds),
                &format_digital(time.hours, time.minutes, time.seconds),
            );
        }
        // catalog zones are checked by tests, so this is a catalog bug
        Err(e) => error!(city = city.id, error = %e, "Cannot render clock"),
    }
}
