use crate::charts::layout::MountPoint;
use crate::charts::visual::{TargetView, Visual};
use crate::selection::DeviceLayout;

/// Where chart resources are actually created.
///
/// Implementations own the concrete resources; the registry only holds the
/// opaque handles they return.
pub trait RenderSurface {
    type Handle;

    /// Whether `target` currently exists on the surface.
    fn has_target(&self, target: MountPoint) -> bool;

    fn create(&mut self, target: MountPoint, visual: &Visual) -> Self::Handle;

    fn destroy(&mut self, target: MountPoint, handle: Self::Handle);

    /// Show the empty state of `target`.
    fn show_placeholder(&mut self, target: MountPoint, message: &str);

    /// Called with no live handles outstanding, before a new cycle renders.
    fn prepare(&mut self, _layout: DeviceLayout) {}
}

/// Result of one [`ChartRegistry::reconcile`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Created,
    Placeholder,
    /// The surface has no such target; nothing was created.
    MissingTarget,
}

/// Holds at most one live chart handle per mount point.
///
/// The only mutation is destroy-then-create: any existing handle for a
/// target is destroyed before the new view is looked at.
pub struct ChartRegistry<S: RenderSurface> {
    surface: S,
    live: [Option<S::Handle>; MountPoint::COUNT],
}

impl<S: RenderSurface> ChartRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: std::array::from_fn(|_| None),
        }
    }

    pub fn reconcile(&mut self, target: MountPoint, view: &TargetView) -> Reconciled {
        self.release(target);

        if !self.surface.has_target(target) {
            tracing::trace!(target = %target, "Render target absent, skipping");
            return Reconciled::MissingTarget;
        }

        match view {
            TargetView::NoData { message } => {
                self.surface.show_placeholder(target, message);
                Reconciled::Placeholder
            }
            TargetView::Ready { visual } => {
                let handle = self.surface.create(target, visual);
                self.live[target.index()] = Some(handle);
                Reconciled::Created
            }
        }
    }

    /// Tear down, then let the surface lay out `layout`'s mount points.
    pub fn reset(&mut self, layout: DeviceLayout) {
        self.teardown();
        self.surface.prepare(layout);
    }

    /// Destroy every live handle.
    pub fn teardown(&mut self) {
        let mut destroyed = 0usize;
        for target in MountPoint::ALL {
            if self.release(target) {
                destroyed += 1;
            }
        }
        if destroyed > 0 {
            tracing::debug!(destroyed, "Chart registry torn down");
        }
    }

    fn release(&mut self, target: MountPoint) -> bool {
        match self.live[target.index()].take() {
            Some(handle) => {
                self.surface.destroy(target, handle);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_live(&self, target: MountPoint) -> bool {
        self.live[target.index()].is_some()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn handle(&self, target: MountPoint) -> Option<&S::Handle> {
        self.live[target.index()].as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: RenderSurface> Drop for ChartRegistry<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
