use folio_core::config::FeedConfig;
use folio_core::feed::{FeedClient, FeedView, PostCard};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::reveal::Reveal;

#[component]
fn BlogCard(post: PostCard) -> impl IntoView {
    let image = match post.image {
        Some(src) => view! {
            <img src=src class="card-img-top blog-img" alt=post.title.clone() loading="lazy"/>
        }
        .into_any(),
        None => view! {
            <div class="blog-img-placeholder d-flex align-items-center justify-content-center">
                <i class="fab fa-medium fa-3x"></i>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card blog-card h-100">
                {image}
                <div class="card-body">
                    <p class="blog-date text-muted small mb-2">
                        <i class="far fa-calendar-alt me-1"></i>
                        {post.date}
                    </p>
                    <h5 class="card-title">
                        <a href=post.link.clone() target="_blank" rel="noopener">{post.title}</a>
                    </h5>
                    <p class="card-text">{post.excerpt}</p>
                    <a href=post.link class="btn btn-sm btn-outline-primary" target="_blank" rel="noopener">
                        "Read More"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Latest feed posts, fetched once when the section mounts.
#[component]
pub fn Blog(feed: FeedConfig) -> impl IntoView {
    let (state, set_state) = signal(None::<FeedView>);
    let profile_url = feed.profile_url();

    let client = FeedClient::new(feed.proxy_url.clone(), &feed.username);
    let limit = feed.posts_to_show;
    spawn_local(async move {
        let result = client.fetch().await;
        if let Err(err) = &result {
            log::error!("Error fetching feed from {}: {}", client.feed_url(), err);
        }
        set_state.set(Some(FeedView::from_result(result, limit)));
    });

    let content = move || match state.get() {
        None => view! {
            <div class="col-12 text-center blog-loading">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">"Loading..."</span>
                </div>
            </div>
        }
        .into_any(),
        Some(FeedView::Cards(posts)) => posts
            .into_iter()
            .map(|post| view! { <BlogCard post=post/> })
            .collect_view()
            .into_any(),
        Some(FeedView::Fallback { message }) => view! {
            <div class="col-12 text-center">
                <div class="alert alert-warning">
                    <p class="mb-2">{message}</p>
                    <a href=profile_url.clone() class="btn btn-sm btn-outline-dark" target="_blank" rel="noopener">
                        "Read my posts on Medium"
                    </a>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <section id="blog" class="py-5">
            <div class="container">
                <Reveal animation="fade-up" class="text-center mb-5">
                    <h2 class="section-title">"Latest Posts"</h2>
                    <Reveal animation="width-expand" delay="200" class="title-underline mx-auto"/>
                </Reveal>
                <div class="row g-4" id="blog-posts">{content}</div>
            </div>
        </section>
    }
}
