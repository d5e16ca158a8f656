use crate::content::{Project, project_by_id};

pub const PROJECT_PATH_PREFIX: &str = "/project/";

// the :id segment of /project/:id
//
// only plain positive decimal integers are ids; signs, whitespace, zero and anything
// u32 cannot hold all route to the not-found page
pub fn parse_project_id(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    segment.parse::<u32>().ok().filter(|id| *id > 0)
}

pub fn lookup_project(segment: &str) -> Option<&'static Project> {
    parse_project_id(segment).and_then(project_by_id)
}

pub fn project_path(id: u32) -> String {
    format!("{PROJECT_PATH_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_project_id("1"), Some(1));
        assert_eq!(parse_project_id("42"), Some(42));
        assert_eq!(parse_project_id("007"), Some(7));
    }

    #[test]
    fn rejects_everything_else() {
        for segment in ["", "0", "-1", "+1", "abc", "1.5", " 1", "1a", "99999999999"] {
            assert_eq!(parse_project_id(segment), None, "segment {segment:?}");
        }
    }

    #[test]
    fn lookup_needs_a_known_project() {
        assert_eq!(lookup_project("2").map(|p| p.id), Some(2));
        assert!(lookup_project("999").is_none());
        assert!(lookup_project("two").is_none());
    }

    #[test]
    fn paths() {
        assert_eq!(project_path(3), "/project/3");
    }
}
