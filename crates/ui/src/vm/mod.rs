mod detail_vm;
mod timeline_vm;

pub use detail_vm::{LessonDetailVm, map_lesson_detail};
pub use timeline_vm::{ProgressChipVm, TimelineItemVm, map_timeline, progress_chip};
