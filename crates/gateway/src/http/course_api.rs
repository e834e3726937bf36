use async_trait::async_trait;
use coursehub_core::model::{Course, CourseId};

use super::HttpGateway;
use super::wire::{CourseWire, map_course};
use crate::api::{CourseGateway, GatewayError};

#[async_trait]
impl CourseGateway for HttpGateway {
    async fn list_courses(&self) -> Result<Vec<Course>, GatewayError> {
        let wires: Vec<CourseWire> = self.get_json(&["courses"]).await?;
        wires
            .into_iter()
            .map(|wire| map_course("GET /courses", wire))
            .collect()
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, GatewayError> {
        let wire: CourseWire = self.get_json(&["courses", id.as_str()]).await?;
        map_course("GET /courses/{id}", wire)
    }
}
