use super::support::*;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn graph_with_users(count: usize) -> (SocialGraph, Vec<String>) {
    let mut graph = graph();
    let users = (0..count)
        .map(|n| register(&mut graph, &format!("user {n}"), &format!("u{n}@x.com")))
        .collect();
    (graph, users)
}

proptest! {
    #[test]
    fn emails_stay_unique(picks in prop::collection::vec(0usize..6, 1..24)) {
        let mut graph = graph();
        let mut seen = HashSet::new();
        for pick in picks {
            let email = format!("p{pick}@x.com");
            let result = graph.register(DraftUser::new("P", email.as_str(), "pw", "p.png"));
            if seen.insert(email) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(matches!(result, Err(UserError::AlreadyExists { .. })), "expected AlreadyExists");
            }
        }
        prop_assert_eq!(graph.users().len(), seen.len());
        let ids: Vec<String> = graph.users().iter().map(|user| user.id.clone()).collect();
        let expected: Vec<String> = (1..=seen.len()).map(|n| format!("user_{n}")).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn follow_membership_tracks_toggle_parity(toggles in prop::collection::vec((0usize..4, 0usize..4), 0..40)) {
        let (mut graph, users) = graph_with_users(4);
        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for (from, to) in toggles {
            let result = graph.update_follower(&users[from], &users[to]);
            if from == to {
                prop_assert!(matches!(result, Err(UserError::SelfFollow { .. })), "expected SelfFollow");
            } else {
                prop_assert!(result.is_ok());
                *counts.entry((from, to)).or_default() += 1;
            }
        }
        for (from, user) in users.iter().enumerate() {
            let record = graph.get_user(user).unwrap();
            let unique: HashSet<&String> = record.following.iter().collect();
            prop_assert_eq!(unique.len(), record.following.len());
            for (to, other) in users.iter().enumerate() {
                let odd = counts.get(&(from, to)).copied().unwrap_or(0) % 2 == 1;
                prop_assert_eq!(record.follows(other), odd);
            }
        }
    }

    #[test]
    fn double_like_restores_membership(
        history in prop::collection::vec((0usize..3, 0usize..3), 0..20),
        post in 0usize..3,
        user in 0usize..3,
    ) {
        let (mut graph, users) = graph_with_users(3);
        let posts: Vec<String> = (0..3).map(|n| publish(&mut graph, &users[n], "p")).collect();
        for (p, u) in history {
            graph.update_like(&posts[p], &users[u]).unwrap();
        }

        let before = graph.get_post(&posts[post]).unwrap().likes.clone();
        graph.update_like(&posts[post], &users[user]).unwrap();
        let after = graph.update_like(&posts[post], &users[user]).unwrap();
        let before: HashSet<String> = before.into_iter().collect();
        let after: HashSet<String> = after.likes.iter().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn comment_ids_count_globally(targets in prop::collection::vec(0usize..4, 1..30)) {
        let (mut graph, users) = graph_with_users(2);
        let posts: Vec<String> = (0..4).map(|n| publish(&mut graph, &users[n % 2], "p")).collect();
        for (index, target) in targets.iter().enumerate() {
            let post = graph.add_comment(&posts[*target], &users[0], DraftComment::new("c")).unwrap();
            prop_assert_eq!(post.comments.last().unwrap().id.clone(), format!("comment_{}", index + 1));
        }
        prop_assert_eq!(graph.comments_issued(), targets.len() as u64);
    }

    #[test]
    fn post_queries_are_sorted_newest_first(offsets in prop::collection::vec(0i64..1_000, 1..20)) {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let stamps: Vec<DateTime<Utc>> = offsets.iter().map(|s| base + Duration::seconds(*s)).collect();
        let cursor = Cell::new(0usize);
        let clock_stamps = stamps.clone();
        let mut graph = SocialGraph::new().with_clock(move || {
            let index = cursor.get();
            cursor.set(index + 1);
            clock_stamps[index % clock_stamps.len()]
        });
        let author = register(&mut graph, "Author", "author@x.com");
        let reader = register(&mut graph, "Reader", "reader@x.com");
        graph.update_follower(&reader, &author).unwrap();
        for _ in &stamps {
            publish(&mut graph, &author, "#tagged");
        }

        let results = [
            graph.search_by_tag("tagged"),
            graph.search_by_user_name("Author"),
            graph.search_by_user_id(&author).unwrap(),
            graph.timeline(&reader).unwrap(),
        ];
        for posts in results {
            prop_assert_eq!(posts.len(), stamps.len());
            prop_assert!(posts.windows(2).all(|pair| pair[0].date >= pair[1].date));
        }
    }
}
