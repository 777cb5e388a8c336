mod community;
mod watched_post;
