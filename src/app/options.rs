/// One operation the dispatcher can run. Declaration order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Init,
    Update,
    Commit,
    Push,
}

/// Which steps were requested on the command line. Built once by argument
/// parsing and never changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub init: bool,
    pub update: bool,
    pub commit: bool,
    pub push: bool,
}

impl Options {
    pub const fn all() -> Self {
        Self {
            init: true,
            update: true,
            commit: true,
            push: true,
        }
    }

    pub const fn is_empty(self) -> bool {
        !(self.init || self.update || self.commit || self.push)
    }

    /// Enabled steps in execution order.
    pub fn steps(self) -> Vec<Step> {
        [
            (self.init, Step::Init),
            (self.update, Step::Update),
            (self.commit, Step::Commit),
            (self.push, Step::Push),
        ]
        .into_iter()
        .filter_map(|(enabled, step)| enabled.then_some(step))
        .collect()
    }
}
