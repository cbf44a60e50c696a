#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::asynchronous::Client;
    use uuid::Uuid;
    use shared::error::VoteError;
    use shared::models::{TeamChoice, VoteSummary};
    use shared::viewer::{Viewer, VIEWER_HEADER};
    use crate::processor::VoteProcessor;
    use crate::routes::{server, AppState};
    use crate::store::MemoryVoteStore;

    fn viewer() -> Viewer {
        Viewer::known(Uuid::new_v4())
    }

    async fn test_client() -> Client {
        let state = AppState::new(MemoryVoteStore::new());
        Client::tracked(server(state))
            .await
            .expect("valid rocket instance")
    }

    async fn get_summary(client: &Client, game: &str, viewer: Option<Uuid>) -> VoteSummary {
        let mut request = client.get(format!("/api/games/{game}/votes/summary"));
        if let Some(id) = viewer {
            request = request.header(Header::new(VIEWER_HEADER, id.to_string()));
        }
        let response = request.dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        response.into_json::<VoteSummary>().await.unwrap()
    }

    // Service layer ------------------------------------------------------

    #[rocket::async_test]
    async fn test_cast_same_choice_is_idempotent() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let voter = viewer();

        let first = VoteProcessor::cast_vote(&store, game, voter, Some("A"))
            .await
            .unwrap();
        let second = VoteProcessor::cast_vote(&store, game, voter, Some("A"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.total, 1);
        assert_eq!(second.viewer_choice, Some(TeamChoice::A));
    }

    #[rocket::async_test]
    async fn test_recast_overwrites_instead_of_adding() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let earlier = viewer();
        let voter = viewer();

        VoteProcessor::cast_vote(&store, game, earlier, Some("A"))
            .await
            .unwrap();
        let before = VoteProcessor::read_summary(&store, game, voter)
            .await
            .unwrap();

        VoteProcessor::cast_vote(&store, game, voter, Some("A"))
            .await
            .unwrap();
        let after = VoteProcessor::cast_vote(&store, game, voter, Some("B"))
            .await
            .unwrap();

        // Exactly one row for this voter, now on B; side A is back where it
        // started before either of the voter's casts.
        assert_eq!(after.count_a, before.count_a);
        assert_eq!(after.count_b, before.count_b + 1);
        assert_eq!(after.total, before.total + 1);
        assert_eq!(after.viewer_choice, Some(TeamChoice::B));
    }

    #[rocket::async_test]
    async fn test_choice_input_is_normalized() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let voter = viewer();

        let summary = VoteProcessor::cast_vote(&store, game, voter, Some("  b "))
            .await
            .unwrap();
        assert_eq!(summary.viewer_choice, Some(TeamChoice::B));

        for junk in [Some("C"), Some("AB"), Some(""), None] {
            let result = VoteProcessor::cast_vote(&store, game, voter, junk).await;
            assert!(matches!(result, Err(VoteError::InvalidChoice)), "accepted {:?}", junk);
        }

        // The rejected casts left the store untouched.
        let after = VoteProcessor::read_summary(&store, game, voter)
            .await
            .unwrap();
        assert_eq!(after, summary);
    }

    #[rocket::async_test]
    async fn test_clear_missing_vote_is_a_noop() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let voter = viewer();

        let before = VoteProcessor::read_summary(&store, game, voter)
            .await
            .unwrap();
        let after = VoteProcessor::clear_vote(&store, game, voter)
            .await
            .unwrap();

        assert_eq!(before, after);
        assert_eq!(after.total, 0);
    }

    #[rocket::async_test]
    async fn test_clear_removes_the_voters_row() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let voter = viewer();

        VoteProcessor::cast_vote(&store, game, voter, Some("A"))
            .await
            .unwrap();
        let cleared = VoteProcessor::clear_vote(&store, game, voter)
            .await
            .unwrap();

        assert_eq!(cleared.total, 0);
        assert_eq!(cleared.viewer_choice, None);

        let next_read = VoteProcessor::read_summary(&store, game, voter)
            .await
            .unwrap();
        assert_eq!(next_read.viewer_choice, None);
    }

    #[rocket::async_test]
    async fn test_writes_require_identity() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();

        let cast = VoteProcessor::cast_vote(&store, game, Viewer::anonymous(), Some("A")).await;
        assert!(matches!(cast, Err(VoteError::Unauthorized)));

        let clear = VoteProcessor::clear_vote(&store, game, Viewer::anonymous()).await;
        assert!(matches!(clear, Err(VoteError::Unauthorized)));

        let summary = VoteProcessor::read_summary(&store, game, Viewer::anonymous())
            .await
            .unwrap();
        assert_eq!(summary.total, 0);
    }

    #[rocket::async_test]
    async fn test_concurrent_casts_by_distinct_voters() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let u1 = viewer();
        let u2 = viewer();

        let (first, second) = futures::join!(
            VoteProcessor::cast_vote(&store, game, u1, Some("A")),
            VoteProcessor::cast_vote(&store, game, u2, Some("B")),
        );
        first.unwrap();
        second.unwrap();

        let summary = VoteProcessor::read_summary(&store, game, Viewer::anonymous())
            .await
            .unwrap();
        assert_eq!((summary.count_a, summary.count_b), (1, 1));
        assert_eq!(summary.total, 2);
    }

    #[rocket::async_test]
    async fn test_concurrent_casts_by_same_voter_collapse() {
        let store = MemoryVoteStore::new();
        let game = Uuid::new_v4();
        let voter = viewer();

        let (first, second) = futures::join!(
            VoteProcessor::cast_vote(&store, game, voter, Some("A")),
            VoteProcessor::cast_vote(&store, game, voter, Some("B")),
        );
        first.unwrap();
        second.unwrap();

        let summary = VoteProcessor::read_summary(&store, game, Viewer::anonymous())
            .await
            .unwrap();
        assert_eq!(summary.total, 1, "same-voter race must not multiply rows");
    }

    // HTTP surface ---------------------------------------------------------

    #[rocket::async_test]
    async fn test_summary_scenario_over_http() {
        let client = test_client().await;
        let game = Uuid::new_v4().to_string();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        // Untouched game reads as all zeros.
        let empty = get_summary(&client, &game, None).await;
        assert_eq!(
            empty,
            VoteSummary {
                count_a: 0,
                count_b: 0,
                total: 0,
                pct_a: 0,
                pct_b: 0,
                viewer_choice: None,
            }
        );

        // u1 picks A.
        let response = client
            .post(format!("/api/games/{game}/votes"))
            .header(ContentType::JSON)
            .header(Header::new(VIEWER_HEADER, u1.to_string()))
            .body(r#"{"choice":"A"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let summary = response.into_json::<VoteSummary>().await.unwrap();
        assert_eq!((summary.count_a, summary.count_b, summary.total), (1, 0, 1));
        assert_eq!((summary.pct_a, summary.pct_b), (100, 0));
        assert_eq!(summary.viewer_choice, Some(TeamChoice::A));

        // u2 picks B; an anonymous read sees the split but no own pick.
        let response = client
            .post(format!("/api/games/{game}/votes"))
            .header(ContentType::JSON)
            .header(Header::new(VIEWER_HEADER, u2.to_string()))
            .body(r#"{"choice":"B"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let anonymous = get_summary(&client, &game, None).await;
        assert_eq!((anonymous.count_a, anonymous.count_b, anonymous.total), (1, 1, 2));
        assert_eq!((anonymous.pct_a, anonymous.pct_b), (50, 50));
        assert_eq!(anonymous.viewer_choice, None);

        // u1 clears; their next read shows B leading and no own pick.
        let response = client
            .delete(format!("/api/games/{game}/votes"))
            .header(Header::new(VIEWER_HEADER, u1.to_string()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let cleared = response.into_json::<VoteSummary>().await.unwrap();
        assert_eq!((cleared.count_a, cleared.count_b, cleared.total), (0, 1, 1));
        assert_eq!((cleared.pct_a, cleared.pct_b), (0, 100));
        assert_eq!(cleared.viewer_choice, None);

        let as_u1 = get_summary(&client, &game, Some(u1)).await;
        assert_eq!(as_u1, cleared);
    }

    #[rocket::async_test]
    async fn test_unauthenticated_write_is_rejected_without_side_effects() {
        let client = test_client().await;
        let game = Uuid::new_v4().to_string();

        let before = get_summary(&client, &game, None).await;

        let response = client
            .post(format!("/api/games/{game}/votes"))
            .header(ContentType::JSON)
            .body(r#"{"choice":"A"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);

        let response = client
            .delete(format!("/api/games/{game}/votes"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);

        let after = get_summary(&client, &game, None).await;
        assert_eq!(before, after);
    }

    #[rocket::async_test]
    async fn test_invalid_choice_is_a_bad_request() {
        let client = test_client().await;
        let game = Uuid::new_v4().to_string();
        let voter = Uuid::new_v4();

        for body in [r#"{"choice":"C"}"#, r#"{"choice":""}"#, r#"{}"#] {
            let response = client
                .post(format!("/api/games/{game}/votes"))
                .header(ContentType::JSON)
                .header(Header::new(VIEWER_HEADER, voter.to_string()))
                .body(body)
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::BadRequest, "body {body}");
        }

        let summary = get_summary(&client, &game, Some(voter)).await;
        assert_eq!(summary.total, 0);
    }

    #[rocket::async_test]
    async fn test_lowercase_choice_is_accepted_over_http() {
        let client = test_client().await;
        let game = Uuid::new_v4().to_string();
        let voter = Uuid::new_v4();

        let response = client
            .post(format!("/api/games/{game}/votes"))
            .header(ContentType::JSON)
            .header(Header::new(VIEWER_HEADER, voter.to_string()))
            .body(r#"{"choice":" b "}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let summary = response.into_json::<VoteSummary>().await.unwrap();
        assert_eq!(summary.viewer_choice, Some(TeamChoice::B));
    }

    #[rocket::async_test]
    async fn test_malformed_game_id_is_a_bad_request() {
        let client = test_client().await;

        let response = client
            .get("/api/games/not-a-uuid/votes/summary")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn test_malformed_viewer_header_reads_as_anonymous() {
        let client = test_client().await;
        let game = Uuid::new_v4().to_string();

        let response = client
            .get(format!("/api/games/{game}/votes/summary"))
            .header(Header::new(VIEWER_HEADER, "definitely-not-a-uuid"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let summary = response.into_json::<VoteSummary>().await.unwrap();
        assert_eq!(summary.viewer_choice, None);

        // The same junk header cannot authorize a write.
        let response = client
            .post(format!("/api/games/{game}/votes"))
            .header(ContentType::JSON)
            .header(Header::new(VIEWER_HEADER, "definitely-not-a-uuid"))
            .body(r#"{"choice":"A"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
    }
}
