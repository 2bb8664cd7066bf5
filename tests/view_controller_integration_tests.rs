use serde_json::json;
use squad_board::constants::{STAT_LABELS, placeholders};
use squad_board::data_fetcher::HttpTeamApi;
use squad_board::data_fetcher::api::create_http_client_with_timeout;
use squad_board::testing_utils::TestDataBuilder;
use squad_board::ui::ViewController;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn controller_for(server: &MockServer) -> ViewController<HttpTeamApi> {
    let client = create_http_client_with_timeout(5).unwrap();
    ViewController::new(HttpTeamApi::new(client, server.uri()))
}

fn player_json(id: i64, name: &str, position: &str, jersey: i32, injury: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "age": 26,
        "date_of_birth": "1998-05-05",
        "position": position,
        "jersey_number": jersey,
        "transfer_price_vnd": 0.0,
        "injury_status": injury
    })
}

/// Page load renders both sections from the API
#[tokio::test]
async fn test_page_load_renders_players_and_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            player_json(1, "Dang Van Lam", "Goalkeeper", 23, "Fit"),
            player_json(2, "Que Ngoc Hai", "Center Back", 3, "Minor Injury"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/matches/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "opponent_name": "Hanoi FC", "match_date": "2024-10-20", "venue": "Home",
             "is_completed": true, "our_score": 3, "opponent_score": 1, "result": "Win"},
            {"id": 11, "opponent_name": "Viettel", "match_date": "2025-03-02", "venue": "Away",
             "is_completed": false, "our_score": 0, "opponent_score": 0, "result": null}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.page_load().await;

    let document = controller.document().await;

    let rows: Vec<Vec<String>> = document
        .players
        .elements_with_class("player-row")
        .map(|row| row.child_elements().map(|c| c.text_content()).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["1", "Dang Van Lam", "26", "Goalkeeper", "23", "Fit"],
            vec!["2", "Que Ngoc Hai", "26", "Center Back", "3", "Minor Injury"],
        ]
    );

    let scores: Vec<String> = document
        .matches
        .elements_with_class("match-card")
        .map(|card| {
            card.child_elements()
                .find(|e| e.has_class("score"))
                .map(|e| e.text_content())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(scores, vec!["3 - 1", "vs"]);

    let options = document.match_select.options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "10");
    assert_eq!(options[0].label, "2024-10-20 vs Hanoi FC");
}

/// Empty collections show exactly the placeholder text
#[tokio::test]
async fn test_empty_collections_show_placeholders() {
    let mock_server = MockServer::start().await;

    for endpoint in ["/players/", "/matches/upcoming"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;
    }

    let controller = controller_for(&mock_server);
    controller.page_load().await;

    let document = controller.document().await;
    assert_eq!(document.players.text_content(), placeholders::NO_PLAYERS);
    assert_eq!(document.players.elements_with_class("player-row").count(), 0);
    assert_eq!(document.matches.text_content(), placeholders::NO_MATCHES);
    assert_eq!(document.matches.elements_with_class("match-card").count(), 0);
}

/// A failing player endpoint does not stop the match list
#[tokio::test]
async fn test_page_load_failure_isolated_to_one_section() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/matches/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "opponent_name": "SLNA", "match_date": "2025-01-10", "venue": "Home",
             "is_completed": false}
        ])))
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.page_load().await;

    let document = controller.document().await;
    assert_eq!(document.players.text_content(), placeholders::PLAYERS_FAILED);
    assert_eq!(document.matches.elements_with_class("upcoming").count(), 1);
}

/// Statistics for a selected match render as twelve cards
#[tokio::test]
async fn test_select_match_renders_statistics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matches/10/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "expected_goals": 2.35, "shots_on_target": 8,
            "ball_possession_percent": 57.0, "total_passes": 520, "successful_passes": 450,
            "pass_success_rate": 86.54, "interceptions": 10, "successful_tackles": 15,
            "aerial_disputes_won": 12, "total_fouls": 9, "yellow_cards": 1, "red_cards": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.select_match("10").await;

    let document = controller.document().await;
    let cards: Vec<(String, String)> = document
        .stats
        .elements_with_class("stat-card")
        .map(|card| {
            let mut spans = card.child_elements().map(|e| e.text_content());
            (spans.next().unwrap_or_default(), spans.next().unwrap_or_default())
        })
        .collect();

    assert_eq!(cards.len(), STAT_LABELS.len());
    assert_eq!(cards[0], ("Expected Goals (xG)".to_string(), "2.35".to_string()));
    assert_eq!(cards[2], ("Possession".to_string(), "57.0%".to_string()));
    assert_eq!(cards[11], ("Red Cards".to_string(), "0".to_string()));
}

/// Missing statistics degrade to the placeholder without panicking
#[tokio::test]
async fn test_missing_statistics_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matches/4/stats"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "Statistics not found for this match."})),
        )
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.select_match("4").await;

    let document = controller.document().await;
    assert_eq!(document.stats.text_content(), placeholders::NO_STATISTICS);
}

/// An empty selection never reaches the network
#[tokio::test]
async fn test_empty_selection_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.select_match("").await;

    let document = controller.document().await;
    assert_eq!(document.stats.text_content(), placeholders::SELECT_MATCH);
}

/// Successful creation: one POST, one list refresh, form cleared
#[tokio::test]
async fn test_create_player_posts_once_then_refreshes_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/players/"))
        .and(body_partial_json(json!({
            "name": "Nguyen Tien Linh",
            "age": 24,
            "date_of_birth": "2000-06-15",
            "position": "Striker",
            "jersey_number": 22,
            "transfer_price_vnd": 0.0,
            "injury_status": "Fit"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(player_json(5, "Nguyen Tien Linh", "Striker", 22, "Fit")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([player_json(
            5,
            "Nguyen Tien Linh",
            "Striker",
            22,
            "Fit"
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.document().await.player_form =
        TestDataBuilder::player_form("Nguyen Tien Linh", "ST", "22");

    controller.create_player().await;

    let document = controller.document().await;
    assert!(document.player_form.is_clear());
    assert!(document.alerts().is_empty());
    assert_eq!(document.players.elements_with_class("player-row").count(), 1);
}

/// A 2xx whose body is not a full player record still counts as created
#[tokio::test]
async fn test_create_player_success_with_partial_body_still_refreshes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.document().await.player_form =
        TestDataBuilder::player_form("Nguyen Tien Linh", "ST", "22");

    controller.create_player().await;

    let document = controller.document().await;
    assert!(document.player_form.is_clear());
    assert!(document.alerts().is_empty());
    assert_eq!(document.players.text_content(), placeholders::NO_PLAYERS);
}

/// Rejected creation: alert with the API's message, no refresh, form kept
#[tokio::test]
async fn test_create_player_rejected_alerts_with_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "age"], "msg": "Input should be less than or equal to 45"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    let mut form = TestDataBuilder::player_form("Old Timer", "CM", "40");
    form.age = "60".to_string();
    controller.document().await.player_form = form.clone();

    controller.create_player().await;

    let document = controller.document().await;
    assert_eq!(document.player_form, form);
    assert_eq!(
        document.alerts(),
        ["Failed to add player: Input should be less than or equal to 45".to_string()]
    );
}

/// API supplied text never becomes markup in the rendered page
#[tokio::test]
async fn test_rendered_page_escapes_api_strings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([player_json(
            1,
            "<script>steal()</script>",
            "Striker",
            9,
            "Fit"
        )])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/matches/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.page_load().await;

    let html = controller.document().await.render_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;steal()&lt;/script&gt;"));
}
