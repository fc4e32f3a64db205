use serde::{Deserialize, Serialize};

use crate::error::{CragError, Result};
use crate::photo::PhotoKey;

/// A vertex of a route line, in normalized image coordinates (0.0..=1.0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

/// The line of one route drawn over one photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub photo: PhotoKey,
    #[serde(default)]
    pub points: Vec<PathPoint>,
}

/// A climbing route. Its display index is its position in the route list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Paths in the order the photos were attached to the route.
    #[serde(default)]
    pub paths: Vec<RoutePath>,
}

impl Route {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            paths: Vec::new(),
        }
    }

    pub fn with_path(mut self, photo: PhotoKey, points: Vec<PathPoint>) -> Self {
        self.paths.push(RoutePath { photo, points });
        self
    }

    /// Photo keys this route is drawn on, first attached first.
    pub fn photo_keys(&self) -> Vec<PhotoKey> {
        self.paths.iter().map(|p| p.photo.clone()).collect()
    }

    pub fn is_on_photo(&self, photo: &PhotoKey) -> bool {
        self.paths.iter().any(|p| &p.photo == photo)
    }

    pub fn path_on(&self, photo: &PhotoKey) -> Option<&[PathPoint]> {
        self.paths
            .iter()
            .find(|p| &p.photo == photo)
            .map(|p| p.points.as_slice())
    }

    /// Append a vertex to the path on `photo`, creating the path if needed.
    pub fn push_point(&mut self, photo: &PhotoKey, point: PathPoint) {
        match self.paths.iter_mut().find(|p| &p.photo == photo) {
            Some(path) => path.points.push(point),
            None => self.paths.push(RoutePath {
                photo: photo.clone(),
                points: vec![point],
            }),
        }
    }

    pub fn move_point(&mut self, photo: &PhotoKey, index: usize, point: PathPoint) -> Result<()> {
        let path = self.path_mut(photo)?;
        let total = path.points.len();
        let slot = path
            .points
            .get_mut(index)
            .ok_or(CragError::PointIndexOutOfRange { index, total })?;
        *slot = point;
        Ok(())
    }

    /// Drop the last vertex on `photo`. A path left empty is removed.
    pub fn remove_last_point(&mut self, photo: &PhotoKey) -> Result<Option<PathPoint>> {
        let path = self.path_mut(photo)?;
        let removed = path.points.pop();
        if path.points.is_empty() {
            self.paths.retain(|p| &p.photo != photo);
        }
        Ok(removed)
    }

    fn path_mut(&mut self, photo: &PhotoKey) -> Result<&mut RoutePath> {
        let id = self.id.clone();
        self.paths
            .iter_mut()
            .find(|p| &p.photo == photo)
            .ok_or(CragError::NoPathOnPhoto(id))
    }
}
