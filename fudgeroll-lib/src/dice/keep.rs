use super::Face;

/// Keep the highest or lowest `n` faces of a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    High(usize),
    Low(usize),
}

impl Keep {
    pub fn count(&self) -> usize {
        match *self {
            Keep::High(n) | Keep::Low(n) => n,
        }
    }

    /// Sort `faces` ascending and mark everything outside the kept window as dropped
    pub fn apply(&self, mut faces: Vec<Face>) -> Vec<Face> {
        faces.sort();
        let n = self.count().min(faces.len());
        let kept = match self {
            Keep::High(_) => faces.len() - n..faces.len(),
            Keep::Low(_) => 0..n,
        };
        for (index, face) in faces.iter_mut().enumerate() {
            face.kept = kept.contains(&index);
        }
        faces
    }
}

impl std::fmt::Display for Keep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keep::High(n) => write!(f, "kh{n}"),
            Keep::Low(n) => write!(f, "kl{n}"),
        }
    }
}
