//! Host viewer integration surface.

use std::path::Path;

/// Scene operations the host viewer exposes to the browser.
///
/// Each load call is independent: a failed volume load must not stop the
/// session from attempting the remaining images or the label.
pub trait HostScene {
    /// Handle to a volume node created in the host scene.
    type VolumeHandle;
    /// Handle to a segmentation node created in the host scene.
    type SegmentationHandle;
    /// Error reported by a failed load.
    type Error: std::error::Error;

    /// Removes everything currently in the scene.
    fn clear_scene(&mut self);

    /// Loads one image volume into the scene.
    fn load_volume(&mut self, path: &Path) -> Result<Self::VolumeHandle, Self::Error>;

    /// Loads one segmentation into the scene.
    fn load_segmentation(&mut self, path: &Path) -> Result<Self::SegmentationHandle, Self::Error>;
}
