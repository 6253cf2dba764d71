//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod hub_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_is_upstream_unavailable() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let hub_error = HubError::from(result.unwrap_err());

        match hub_error {
            HubError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
        assert_eq!(hub_error.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_upstream_status_error() {
        let error = HubError::UpstreamStatus {
            url: "https://example.test/api/bootstrap-static/".to_string(),
            status: 503,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("503"));
        assert!(error_string.contains("bootstrap-static"));
        assert_eq!(error.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_schema_mismatch_error() {
        let error = HubError::schema("event/10/live", "missing field `stats`");

        let error_string = error.to_string();
        assert!(error_string.contains("Unexpected data structure"));
        assert!(error_string.contains("event/10/live"));
        assert!(error_string.contains("missing field `stats`"));
        assert_eq!(error.kind(), ErrorKind::UpstreamSchemaMismatch);
    }

    #[test]
    fn test_not_found_variants() {
        assert_eq!(
            HubError::MatchNotFound { match_id: 55 }.to_string(),
            "Match with id 55 not found in league data"
        );
        assert_eq!(HubError::LeagueNotFound { id: 1 }.kind(), ErrorKind::NotFound);
        assert_eq!(
            HubError::MatchNotFound { match_id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            HubError::NotFound {
                resource: "Team",
                id: "42".to_string()
            }
            .to_string(),
            "Team not found: 42"
        );
    }

    #[test]
    fn test_missing_parameter_error() {
        let error = HubError::MissingParameter { name: "Event" };
        assert_eq!(error.to_string(), "Event parameter is required");
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let hub_error = HubError::from(parse_error);

        match hub_error {
            HubError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
        assert_eq!(hub_error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_league_exists_is_conflict() {
        let error = HubError::LeagueExists { id: 738279 };
        assert!(error.to_string().contains("738279"));
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::QueryReturnedNoRows;
        let hub_error = HubError::from(db_error);

        match hub_error {
            HubError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
        assert_eq!(hub_error.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_upstream_missing_as_rewrites_404_only() {
        let missing = HubError::UpstreamStatus {
            url: "https://example.test/api/entry/9/".to_string(),
            status: 404,
        }
        .upstream_missing_as("Team", 9);
        match missing {
            HubError::NotFound { resource, id } => {
                assert_eq!(resource, "Team");
                assert_eq!(id, "9");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }

        let unavailable = HubError::UpstreamStatus {
            url: "https://example.test/api/entry/9/".to_string(),
            status: 500,
        }
        .upstream_missing_as("Team", 9);
        assert_eq!(unavailable.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_error_kind_names() {
        assert_eq!(ErrorKind::UpstreamUnavailable.as_str(), "upstream_unavailable");
        assert_eq!(
            ErrorKind::UpstreamSchemaMismatch.as_str(),
            "upstream_schema_mismatch"
        );
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
        assert_eq!(ErrorKind::Validation.as_str(), "validation_error");
        assert_eq!(ErrorKind::Conflict.as_str(), "conflict");
        assert_eq!(ErrorKind::Internal.as_str(), "internal_error");
    }
}
