use crate::ports::IDGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IDGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}
