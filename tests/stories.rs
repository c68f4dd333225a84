mod common;

use common::{
    body_with, client, full_body, minimal_body, path, COMMENT, MEMBER_ID, STORY, STORY_HISTORY, STORY_LINK, TASK, TOKEN,
};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use shortcut_api::types::{
    CreateStoryCommentInput, CreateStoryFromTemplateInput, CreateStoryInput, CreateStoryLinkInput, CreateTaskInput,
    Story, StoryLinkVerb, StoryType, UpdateStoryCommentInput, UpdateStoryInput, UpdateStoryLinkInput, UpdateTaskInput,
};
use shortcut_api::{Record, ShortcutError};

#[test]
fn test_get_story_minimal_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(path("/stories/123"));
        then.status(200)
            .json_body(json!({"id": 123, "name": "Fix bug", "story_type": "bug"}));
    });

    let story = client(&server).get_story(123).unwrap();

    mock.assert();
    assert_eq!(story.id, 123);
    assert_eq!(story.name, "Fix bug");
    assert_eq!(story.story_type, StoryType::Bug);
    assert!(story.story_type == "bug");
    assert!(story.description.is_none());
    assert!(story.owner_ids.is_empty());
}

#[test]
fn test_requests_carry_auth_and_json_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(path("/stories/1"))
            .header("Shortcut-Token", TOKEN)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Accept", "application/json; charset=utf-8")
            .header_exists("User-Agent");
        then.status(200).json_body(minimal_body(STORY, 1));
    });

    client(&server).get_story(1).unwrap();
    mock.assert();
}

#[test]
fn test_full_story_round_trips() {
    let body = full_body(STORY, 7);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(path("/stories/7"));
        then.status(200).json_body(body.clone());
    });

    let story = client(&server).get_story(7).unwrap();
    let reencoded = serde_json::to_value(&story).unwrap();

    // Vec fields outside the schema come back as empty lists
    let mut expected = body.as_object().unwrap().clone();
    for key in ["follower_ids", "labels", "external_links", "comments", "tasks", "story_links"] {
        expected.entry(key).or_insert(json!([]));
    }
    assert_eq!(reencoded, serde_json::Value::Object(expected));
}

#[test]
fn test_create_story_echoes_input() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(path("/stories"))
            .json_body(json!({"name": "Fix login", "workflow_state_id": 500001, "story_type": "bug"}));
        then.status(201).json_body(json!({
            "id": 4321,
            "name": "Fix login",
            "story_type": "bug",
            "workflow_state_id": 500001,
            "created_at": "2023-06-01T12:00:00Z"
        }));
    });

    let input = CreateStoryInput::new("Fix login")
        .with_workflow_state_id(500001)
        .with_story_type(StoryType::Bug);
    let story = client(&server).create_story(&input).unwrap();

    mock.assert();
    assert_eq!(story.id, 4321);
    assert_eq!(story.name, input.name);
    assert_eq!(story.workflow_state_id, input.workflow_state_id);
    assert_eq!(Some(story.story_type), input.story_type);
}

#[test]
fn test_create_story_validation_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(path("/stories"));
        then.status(400)
            .json_body(json!({"message": "The request included invalid or missing parameters.", "errors": {}}));
    });

    let err = client(&server).create_story(&CreateStoryInput::new("x")).unwrap_err();
    match err {
        ShortcutError::ValidationFailed { status, detail, .. } => {
            assert_eq!(status, Some(400));
            assert_eq!(detail.as_deref(), Some("The request included invalid or missing parameters."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_update_story_sends_only_set_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path(path("/stories/9")).json_body(json!({"archived": true}));
        then.status(200).json_body(json!({"id": 9, "name": "Old", "story_type": "chore", "archived": true}));
    });

    let input = UpdateStoryInput {
        archived: Some(true),
        ..Default::default()
    };
    let story = client(&server).update_story(9, &input).unwrap();

    mock.assert();
    assert_eq!(story.archived, Some(true));
}

#[test]
fn test_delete_story() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path(path("/stories/55"));
        then.status(204);
    });

    client(&server).delete_story(55).unwrap();
    mock.assert_hits(1);
}

#[test]
fn test_delete_unknown_story_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path(path("/stories/404"));
        then.status(404).body("Not Found");
    });

    let err = client(&server).delete_story(404).unwrap_err();
    assert!(matches!(err, ShortcutError::NotFound { .. }));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some("Not Found"));
}

#[test]
fn test_story_missing_required_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(path("/stories/1"));
        then.status(200).json_body(json!({"id": 1, "story_type": "bug"}));
    });

    let err = client(&server).get_story(1).unwrap_err();
    assert!(matches!(err, ShortcutError::SchemaMismatch { .. }));
}

#[test]
fn test_story_malformed_timestamp() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(path("/stories/1"));
        then.status(200)
            .json_body(json!({"id": 1, "name": "x", "story_type": "bug", "created_at": "last tuesday"}));
    });

    let err = client(&server).get_story(1).unwrap_err();
    assert!(matches!(err, ShortcutError::MalformedTimestamp { .. }));
}

#[test]
fn test_external_link_stories() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(path("/external-link/stories"))
            .query_param("external_link", "https://example.com/ticket/1");
        then.status(200).json_body(json!([minimal_body(STORY, 1), minimal_body(STORY, 2)]));
    });

    let stories = client(&server)
        .get_external_link_stories("https://example.com/ticket/1")
        .unwrap();

    mock.assert();
    assert_eq!(stories.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_story_comments() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path(path("/stories/5/comments"));
        then.status(200).json_body(json!([full_body(COMMENT, 1)]));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path(path("/stories/5/comments"))
            .json_body(json!({"text": "Looks good", "parent_id": 1}));
        then.status(201).json_body(json!({"id": 2, "text": "Looks good", "parent_id": 1, "story_id": 5}));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path(path("/stories/5/comments/2"))
            .json_body(json!({"text": "Looks great"}));
        then.status(200).json_body(json!({"id": 2, "text": "Looks great"}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path(path("/stories/5/comments/2"));
        then.status(204);
    });

    let client = client(&server);
    assert_eq!(client.list_story_comments(5).unwrap().len(), 1);

    let comment = client
        .create_story_comment(5, &CreateStoryCommentInput::new("Looks good").reply_to(1))
        .unwrap();
    assert_eq!(comment.parent_id, Some(1));

    let comment = client
        .update_story_comment(5, 2, &UpdateStoryCommentInput::new("Looks great"))
        .unwrap();
    assert_eq!(comment.text.as_deref(), Some("Looks great"));

    client.delete_story_comment(5, 2).unwrap();

    list.assert();
    create.assert();
    update.assert();
    delete.assert();
}

#[test]
fn test_story_tasks() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path(path("/stories/5/tasks"))
            .json_body(json!({"description": "Write tests"}));
        then.status(201).json_body(json!({"id": 30, "description": "Write tests", "complete": false}));
    });
    let complete = server.mock(|when, then| {
        when.method(PUT)
            .path(path("/stories/5/tasks/30"))
            .json_body(json!({"complete": true}));
        then.status(200).json_body(json!({"id": 30, "description": "Write tests", "complete": true}));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path(path("/stories/5/tasks/30"));
        then.status(200).json_body(full_body(TASK, 30));
    });

    let client = client(&server);
    let task = client.create_story_task(5, &CreateTaskInput::new("Write tests")).unwrap();
    assert_eq!(task.complete, Some(false));

    let task = client.update_story_task(5, task.id, &UpdateTaskInput::complete()).unwrap();
    assert_eq!(task.complete, Some(true));

    assert_eq!(client.get_story_task(5, 30).unwrap().id, 30);

    create.assert();
    complete.assert();
    get.assert();
}

#[test]
fn test_create_story_link_returns_single_link() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(path("/story-links"))
            .json_body(json!({"subject_id": 1, "object_id": 2, "verb": "blocks"}));
        then.status(201).json_body(json!({"id": 77, "subject_id": 1, "object_id": 2, "verb": "blocks"}));
    });

    let link = client(&server)
        .create_story_link(&CreateStoryLinkInput::new(1, StoryLinkVerb::Blocks, 2))
        .unwrap();

    mock.assert();
    assert_eq!(link.id, 77);
    assert_eq!(link.verb, StoryLinkVerb::Blocks);
}

#[test]
fn test_delete_story_link() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path(path("/story-links/77"));
        then.status(204);
    });

    client(&server).delete_story_link(77).unwrap();
    mock.assert();
}

#[test]
fn test_story_link_unknown_verb_passes_through() {
    let link = shortcut_api::types::StoryLink::from_json(
        common::body_with(STORY_LINK, 1, json!({"verb": "is parent of"})),
    )
    .unwrap();
    assert_eq!(link.verb, StoryLinkVerb::Other("is parent of".to_string()));
}

#[test]
fn test_story_from_json_matches_http_decode() {
    let body = full_body(STORY, 3);
    let direct = Story::from_json(body.clone()).unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(path("/stories/3"));
        then.status(200).json_body(body);
    });
    assert_eq!(client(&server).get_story(3).unwrap(), direct);
}

#[test]
fn test_story_task_list_and_delete() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path(path("/stories/5/tasks"));
        then.status(200).json_body(json!([full_body(TASK, 30), minimal_body(TASK, 31)]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path(path("/stories/5/tasks/31"));
        then.status(204);
    });

    let client = client(&server);
    let tasks = client.list_story_tasks(5).unwrap();
    assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![30, 31]);
    client.delete_story_task(5, 31).unwrap();

    list.assert();
    delete.assert();
}

#[test]
fn test_get_story_comment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(path("/stories/5/comments/2"));
        then.status(200).json_body(full_body(COMMENT, 2));
    });

    let comment = client(&server).get_story_comment(5, 2).unwrap();
    mock.assert();
    assert_eq!(comment.text.as_deref(), Some("text 2"));
}

#[test]
fn test_get_and_update_story_link() {
    let server = MockServer::start();
    let get = server.mock(|when, then| {
        when.method(GET).path(path("/story-links/77"));
        then.status(200).json_body(full_body(STORY_LINK, 77));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path(path("/story-links/77"))
            .json_body(json!({"verb": "duplicates"}));
        then.status(200)
            .json_body(json!({"id": 77, "subject_id": 1, "object_id": 2, "verb": "duplicates"}));
    });

    let client = client(&server);
    assert_eq!(client.get_story_link(77).unwrap().id, 77);

    let input = UpdateStoryLinkInput {
        verb: Some(StoryLinkVerb::Duplicates),
        ..Default::default()
    };
    assert_eq!(client.update_story_link(77, &input).unwrap().verb, StoryLinkVerb::Duplicates);

    get.assert();
    update.assert();
}

#[test]
fn test_story_history() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(path("/stories/12/history"));
        then.status(200).json_body(json!([
            body_with(STORY_HISTORY, 1, json!({
                "actions": [{"id": 12, "action": "create", "entity_type": "story"}],
                "references": null
            })),
            body_with(STORY_HISTORY, 2, json!({
                "actions": [{"id": 12, "action": "update", "entity_type": "story"}]
            }))
        ]));
    });

    let history = client(&server).get_story_history(12).unwrap();
    mock.assert();
    let kinds: Vec<&str> = history.iter().flat_map(|h| h.action_kinds()).collect();
    assert_eq!(kinds, vec!["create", "update"]);
    assert!(history[0].references.is_empty());
    assert_eq!(history[0].primary_id, Some(1));
}

#[test]
fn test_story_sub_tasks() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(path("/stories/12/sub-tasks"));
        then.status(200).json_body(json!([minimal_body(STORY, 13), minimal_body(STORY, 14)]));
    });

    let sub_tasks = client(&server).list_story_sub_tasks(12).unwrap();
    mock.assert();
    assert_eq!(sub_tasks.iter().map(|s| s.id).collect::<Vec<_>>(), vec![13, 14]);
}

#[test]
fn test_comment_reactions_and_slack_unlink() {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(POST)
            .path(path("/stories/5/comments/2/reactions"))
            .json_body(json!({"emoji": ":tada:"}));
        then.status(201).json_body(json!([{"emoji": ":tada:", "permission_ids": [MEMBER_ID]}]));
    });
    let remove = server.mock(|when, then| {
        when.method(DELETE)
            .path(path("/stories/5/comments/2/reactions"))
            .json_body(json!({"emoji": ":tada:"}));
        then.status(204);
    });
    let unlink = server.mock(|when, then| {
        when.method(POST).path(path("/stories/5/comments/2/unlink-from-slack"));
        then.status(200).json_body(full_body(COMMENT, 2));
    });

    let client = client(&server);
    client.create_story_reaction(5, 2, ":tada:").unwrap();
    client.delete_story_reaction(5, 2, ":tada:").unwrap();
    client.unlink_comment_thread_from_slack(5, 2).unwrap();

    add.assert();
    remove.assert();
    unlink.assert();
}

#[test]
fn test_create_story_from_template() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(path("/stories/from-template")).json_body(json!({
            "story_template_id": MEMBER_ID,
            "name": "Login fails on Safari",
            "workflow_state_id": 500
        }));
        then.status(201).json_body(json!({"id": 77, "name": "Login fails on Safari", "story_type": "bug"}));
    });

    let input = CreateStoryFromTemplateInput::new(MEMBER_ID.parse().unwrap())
        .with_name("Login fails on Safari")
        .with_workflow_state_id(500);
    let story = client(&server).create_story_from_template(&input).unwrap();

    mock.assert();
    assert_eq!(story.id, 77);
    assert_eq!(story.story_type, StoryType::Bug);
}
