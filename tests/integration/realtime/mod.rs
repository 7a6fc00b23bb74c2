//! Realtime QnA tests over the in-memory broker
