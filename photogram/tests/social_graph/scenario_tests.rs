use super::support::*;

#[test]
fn tag_search_and_timeline_follow_toggle() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let b = register(&mut graph, "B", "b@x.com");
    let a_post = publish(&mut graph, &a, "sunset #travel");
    publish(&mut graph, &b, "no tag here");

    assert_eq!(ids(graph.search_by_tag("travel")), [a_post.clone()]);

    graph.update_follower(&b, &a).expect("follow");
    assert_eq!(ids(graph.timeline(&b).expect("timeline")), [a_post]);

    graph.update_follower(&b, &a).expect("unfollow");
    assert!(graph.timeline(&b).expect("timeline").is_empty());
}

#[test]
fn login_with_wrong_password_fails() {
    let mut graph = graph();
    register(&mut graph, "A", "a@x.com");

    let err = graph.login("a@x.com", "not-the-password").unwrap_err();
    assert!(matches!(err, UserError::InvalidCredentials));
    assert_eq!(graph.login("a@x.com", "secret").expect("login").email, "a@x.com");
}

#[test]
fn like_toggles_on_off_on() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let b = register(&mut graph, "B", "b@x.com");
    let post = publish(&mut graph, &a, "hello");

    assert!(graph.update_like(&post, &b).expect("like").is_liked_by(&b));
    assert!(!graph.update_like(&post, &b).expect("unlike").is_liked_by(&b));
    let liked = graph.update_like(&post, &b).expect("like again");
    assert!(liked.is_liked_by(&b));
    assert_eq!(liked.like_count(), 1);
}

#[test]
fn like_requires_existing_user_and_post() {
    let mut graph = graph();
    let a = register(&mut graph, "A", "a@x.com");
    let post = publish(&mut graph, &a, "hello");

    assert!(matches!(
        graph.update_like(&post, "user_404"),
        Err(SocialError::User(UserError::NotFound { .. }))
    ));
    assert!(matches!(
        graph.update_like("post_404", &a),
        Err(SocialError::Post(PostError::NotFound { .. }))
    ));
    assert!(graph.get_post(&post).expect("post").likes.is_empty());
}

#[test]
fn sequential_ids_for_users_posts_and_comments() {
    let mut graph = graph();
    let users: Vec<String> = (1..=3)
        .map(|n| register(&mut graph, &format!("U{n}"), &format!("u{n}@x.com")))
        .collect();
    assert_eq!(users, ["user_1", "user_2", "user_3"]);

    let first = publish(&mut graph, &users[0], "one");
    let second = publish(&mut graph, &users[1], "two");
    assert_eq!([first.as_str(), second.as_str()], ["post_1", "post_2"]);

    let mut comment_ids = Vec::new();
    for (post, user) in [(&second, &users[0]), (&first, &users[2]), (&second, &users[1])] {
        let updated = graph
            .add_comment(post, user, DraftComment::new("nice"))
            .expect("comment");
        comment_ids.push(updated.comments.last().expect("comment").id.clone());
    }
    assert_eq!(comment_ids, ["comment_1", "comment_2", "comment_3"]);
}

#[test]
fn author_searches_sort_newest_first() {
    let mut graph = graph();
    let ana = register(&mut graph, "Ana Paula", "ana@x.com");
    let paula = register(&mut graph, "Paula", "paula@x.com");
    let bruno = register(&mut graph, "Bruno", "bruno@x.com");
    let p1 = publish(&mut graph, &ana, "1");
    let p2 = publish(&mut graph, &bruno, "2");
    let p3 = publish(&mut graph, &paula, "3");
    let p4 = publish(&mut graph, &ana, "4");

    assert_eq!(ids(graph.search_by_user_name("Paula")), [p4.clone(), p3, p1.clone()]);
    assert_eq!(ids(graph.search_by_user_id(&ana).expect("search")), [p4, p1]);
    assert_eq!(ids(graph.search_by_user_id(&bruno).expect("search")), [p2]);
    assert!(matches!(graph.search_by_user_id("user_99"), Err(UserError::NotFound { .. })));
}

#[test]
fn name_search_is_alphabetical() {
    let mut graph = graph();
    for (name, email) in [("Zoe Lima", "z@x.com"), ("ana Lima", "a@x.com"), ("Bea Lima", "b@x.com"), ("Carl", "c@x.com")] {
        register(&mut graph, name, email);
    }
    let names: Vec<&str> = graph.search_by_name("Lima").iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, ["ana Lima", "Bea Lima", "Zoe Lima"]);
    assert!(graph.search_by_name("").is_empty());
}
