use super::support::*;

#[test]
fn duplicate_registration_changes_nothing() {
    let mut graph = graph();
    register(&mut graph, "A", "a@x.com");

    let err = graph
        .register(DraftUser::new("Impostor", "a@x.com", "other", "i.png"))
        .unwrap_err();
    assert!(matches!(err, UserError::AlreadyExists { .. }));
    assert_eq!(graph.users().len(), 1);
    assert_eq!(graph.users()[0].name, "A");
}

#[test]
fn comments_are_append_only() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let b = register(&mut graph, "B", "b@x.com");
    let post = publish(&mut graph, &a, "hello");

    graph.add_comment(&post, &b, DraftComment::new("first")).expect("comment");
    let before = graph.get_post(&post).expect("post").comments.clone();

    let updated = graph.add_comment(&post, &a, DraftComment::new("second")).expect("comment");
    assert_eq!(updated.comments.len(), before.len() + 1);
    assert_eq!(updated.comments[..before.len()], before[..]);
    let last = updated.comments.last().expect("comment");
    assert_eq!((last.body.as_str(), last.user_id.as_str()), ("second", a.as_str()));
}

#[test]
fn failed_comment_leaves_post_untouched() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let post = publish(&mut graph, &a, "hello");

    let err = graph
        .add_comment(&post, "user_42", DraftComment::new("ghost"))
        .unwrap_err();
    assert!(err.is_not_found());
    let err = graph
        .add_comment("post_42", &a, DraftComment::new("lost"))
        .unwrap_err();
    assert!(matches!(err, SocialError::Post(PostError::NotFound { .. })));
    assert!(graph.get_post(&post).expect("post").comments.is_empty());
}

#[test]
fn deleted_post_disappears_everywhere() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let b = register(&mut graph, "B", "b@x.com");
    let kept = publish(&mut graph, &a, "keep #travel");
    let doomed = publish(&mut graph, &a, "drop #travel");
    graph.add_comment(&doomed, &b, DraftComment::new("bye")).expect("comment");
    graph.update_like(&doomed, &b).expect("like");
    graph.update_follower(&b, &a).expect("follow");

    let removed = graph.delete_post(&doomed).expect("delete");
    assert_eq!(removed.comments.len(), 1);
    assert_eq!(removed.likes, [b.clone()]);

    assert!(matches!(graph.get_post(&doomed), Err(PostError::NotFound { .. })));
    assert_eq!(ids(graph.search_by_tag("travel")), [kept.clone()]);
    assert_eq!(ids(graph.search_by_user_name("A")), [kept.clone()]);
    assert_eq!(ids(graph.search_by_user_id(&a).expect("search")), [kept.clone()]);
    assert_eq!(ids(graph.timeline(&b).expect("timeline")), [kept]);
    // comment numbering keeps counting past the removed comment
    assert_eq!(graph.comments_issued(), 1);
}

#[test]
fn edit_replaces_content_only() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let post = publish(&mut graph, &a, "draft #wip");

    let edited = graph
        .edit_post(&post, DraftPost::new("final.jpg", "done #art"))
        .expect("edit");
    assert_eq!((edited.image.as_str(), edited.description.as_str()), ("final.jpg", "done #art"));
    assert!(graph.search_by_tag("wip").is_empty());
    assert_eq!(ids(graph.search_by_tag("art")), [post]);

    let err = graph
        .edit_post("post_77", DraftPost::new("x.jpg", "x"))
        .unwrap_err();
    assert!(matches!(err, PostError::NotFound { .. }));
}

#[test]
fn free_form_text_is_stored_verbatim() {
    let mut graph = graph();
    let bob = graph
        .register(DraftUser::new("Bob", "bob", "pw", ""))
        .expect("register without a real email")
        .id
        .clone();

    let long = "x".repeat(2201);
    let post = graph
        .add_post(&bob, DraftPost::new("", long.as_str()))
        .expect("add post with long caption")
        .id
        .clone();
    assert_eq!(graph.get_post(&post).expect("post").description, long);

    let blank = publish(&mut graph, &bob, "");
    graph
        .edit_post(&blank, DraftPost::new("", ""))
        .expect("edit to empty fields");

    let updated = graph
        .add_comment(&post, &bob, DraftComment::new("  "))
        .expect("whitespace comment");
    assert_eq!(updated.comments[0].body, "  ");
    assert_eq!(graph.comments_issued(), 1);
}

#[test]
fn collection_size_ids_can_collide_after_delete() {
    let mut graph = graph_with(IdStrategy::CollectionSize);
    let a = register(&mut graph, "A", "a@x.com");
    let first = publish(&mut graph, &a, "one");
    let second = publish(&mut graph, &a, "two");
    graph.delete_post(&first).expect("delete");

    let third = publish(&mut graph, &a, "three");
    assert_eq!(third, second);
    assert_eq!(graph.posts().len(), 2);
}

#[test]
fn follow_edges_are_directional() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let b = register(&mut graph, "B", "b@x.com");
    publish(&mut graph, &b, "from b");

    let follower = graph.update_follower(&a, &b).expect("follow");
    assert!(follower.follows(&b));
    assert!(!graph.get_user(&b).expect("user").follows(&a));
    assert_eq!(graph.timeline(&a).expect("timeline").len(), 1);
    assert!(graph.timeline(&b).expect("timeline").is_empty());
}
