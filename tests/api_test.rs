//! End-to-end matchup request through the full application stack

use actix_web::{test, web, App};
use fpl_hub::{
    server::{configure, AppState, RequestLog},
    storage::LeagueDatabase,
    HubConfig, LeagueId,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[actix_web::test]
async fn test_matchup_route_with_league_override() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/bootstrap-static/",
        json!({
            "elements": [{"id": 7, "web_name": "Salah", "element_type": 3, "team": 12}],
            "teams": [{"id": 12, "short_name": "LIV"}],
            "events": []
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/leagues-h2h-matches/league/1176282/"))
        .and(query_param("event", "10"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "has_next": false,
            "page": 1,
            "results": [{
                "id": 55,
                "entry_1_entry": 100, "entry_1_name": "Team A", "entry_1_points": 45,
                "entry_2_entry": 200, "entry_2_name": "Team B", "entry_2_points": 38
            }]
        })))
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/api/event/10/live/",
        json!({"elements": [{"id": 7, "stats": {"total_points": 12, "yellow_cards": 0, "red_cards": 0}}]}),
    )
    .await;
    for entry in [100, 200] {
        mount_json(
            &server,
            &format!("/api/entry/{entry}/event/10/picks/"),
            json!({"picks": [{"element": 7, "position": 1, "multiplier": 2, "is_captain": true}]}),
        )
        .await;
        mount_json(
            &server,
            &format!("/api/entry/{entry}/"),
            json!({"player_first_name": "Manager", "player_last_name": entry.to_string()}),
        )
        .await;
    }

    let config = HubConfig {
        api_base_url: format!("{}/api", server.uri()),
        league_id: LeagueId::new(738279),
        ..HubConfig::default()
    };
    let state = AppState::new(config, LeagueDatabase::new_in_memory().unwrap()).unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestLog)
            .configure(configure),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/matchup/55?event=10&league_id=1176282")
            .to_request(),
    )
    .await;

    assert_eq!(body["team_h_name"], "Team A");
    assert_eq!(body["team_a_manager"], "Manager 200");
    assert_eq!(body["team_h_score"], 45);
    assert_eq!(
        body["team_h_picks"][0],
        json!({
            "id": 7,
            "name": "Salah",
            "position": "MID",
            "points": 12,
            "isCaptain": true,
            "club": "LIV",
            "yellowCards": 0,
            "redCards": 0,
            "isStarting": true,
            "multiplier": 2
        })
    );
}
