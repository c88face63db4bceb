use time::OffsetDateTime;

pub trait Clock: Send + Sync + 'static {
	fn now(&self) -> OffsetDateTime;
}

#[cfg(test)]
pub struct FixedClock(pub OffsetDateTime);

#[cfg(test)]
impl Clock for FixedClock {
	fn now(&self) -> OffsetDateTime {
		self.0
	}
}
